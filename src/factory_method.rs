//! # The Factory Method Pattern
//!
//! A logistics company plans deliveries without knowing which vehicle it runs:
//! the [`Logistics`] trait declares the factory method
//! [`create_transport`](Logistics::create_transport) and a provided
//! [`plan_delivery`](Logistics::plan_delivery) that only ever talks to the
//! [`Transport`] product trait. Each concrete creator picks its own product:
//! [`RoadLogistics`] makes a [`Truck`], [`SeaLogistics`] makes a [`Ship`].

/// A means of delivering goods.
pub trait Transport {
    /// One-line description of the delivery being carried out.
    fn deliver(&self) -> String;

    /// Flat delivery fee in euros.
    fn cost_eur(&self) -> u32;
}

/// Road transport.
pub struct Truck;

impl Transport for Truck {
    fn deliver(&self) -> String {
        "Delivering by road in a truck.".to_string()
    }

    fn cost_eur(&self) -> u32 {
        50
    }
}

/// Sea transport.
pub struct Ship;

impl Transport for Ship {
    fn deliver(&self) -> String {
        "Delivering by sea in a ship.".to_string()
    }

    fn cost_eur(&self) -> u32 {
        200
    }
}

/// A delivery planner. Implementors decide the concrete transport; the
/// planning logic itself is shared.
pub trait Logistics {
    /// The factory method: produce the transport this company runs.
    fn create_transport(&self) -> Box<dyn Transport>;

    /// Plan a delivery with whatever transport the factory method returns.
    fn plan_delivery(&self) -> String {
        let transport = self.create_transport();
        format!(
            "{}\nDelivery cost: {} EUR",
            transport.deliver(),
            transport.cost_eur()
        )
    }
}

/// Delivers over land.
pub struct RoadLogistics;

impl Logistics for RoadLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

/// Delivers over water.
pub struct SeaLogistics;

impl Logistics for SeaLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}
