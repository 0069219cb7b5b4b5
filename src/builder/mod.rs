//! # The Builder Pattern
//!
//! Step-by-step construction of a [`House`] record. A [`HouseBuilder`] owns
//! exactly one house under construction at any time: step calls mutate it,
//! [`take_product`](HouseBuilder::take_product) hands it to the caller and
//! implicitly starts a fresh one, and [`reset`](HouseBuilder::reset) discards
//! work in progress.
//!
//! Builder variants differ in which optional steps they offer. Instead of a
//! subtype hierarchy probed by downcasting, the optional steps live on two
//! orthogonal capability traits, [`LuxuryFeatures`] and [`EcoFeatures`], and
//! [`HouseBuilder`] carries capability queries that return a typed handle when
//! the variant supports the steps and `None` when it does not. A caller (or the
//! [`Director`]) probes before it asks; a builder without a capability can never
//! be driven through steps it lacks.
//!
//! The [`Director`] knows two canned step sequences ("simple" and "luxury") but
//! never extracts the product: collecting the result is always the caller's job.

mod basic;
mod director;
mod eco;
mod house;
mod luxury;

pub use basic::BasicHouseBuilder;
pub use director::{Director, DirectorError};
pub use eco::EcoLuxuryHouseBuilder;
pub use house::House;
pub use luxury::LuxuryHouseBuilder;

/// Step operations shared by every house builder.
///
/// All steps mutate the builder's private in-progress [`House`]; none of them
/// validate their input. The trait is object-safe so a [`Director`] can drive
/// any variant through `&mut dyn HouseBuilder`.
pub trait HouseBuilder {
    /// Discard any work in progress and start over from an empty house.
    ///
    /// Calling `reset` twice in a row is the same as calling it once.
    fn reset(&mut self);

    /// Set the wall material of the house under construction.
    fn set_walls(&mut self, material: &str);

    /// Set the door kind of the house under construction.
    fn set_door(&mut self, kind: &str);

    /// Set the window count of the house under construction.
    fn set_windows(&mut self, count: u32);

    /// Set the roof kind of the house under construction.
    fn set_roof(&mut self, kind: &str);

    /// Hand the finished house to the caller and implicitly start a fresh one.
    ///
    /// The caller becomes the sole owner of the returned house; the builder
    /// keeps no reference to it. Step calls made afterwards contribute to a
    /// brand-new house.
    fn take_product(&mut self) -> House;

    /// The pool-and-garden steps, if this builder variant has them.
    fn luxury_features(&mut self) -> Option<&mut dyn LuxuryFeatures> {
        None
    }

    /// The solar-panel step, if this builder variant has it.
    fn eco_features(&mut self) -> Option<&mut dyn EcoFeatures> {
        None
    }
}

/// Optional luxury steps. Each sets one flag; there is no unset operation.
pub trait LuxuryFeatures {
    fn add_swimming_pool(&mut self);
    fn add_garden(&mut self);
}

/// Optional eco steps, orthogonal to [`LuxuryFeatures`].
pub trait EcoFeatures {
    fn add_solar_panels(&mut self);
}
