use std::mem;

use super::{EcoFeatures, House, HouseBuilder, LuxuryFeatures};

/// Builder for an eco-luxury house: every luxury step plus solar panels.
///
/// Its capability surface is a strict superset of [`LuxuryHouseBuilder`]'s:
/// both capability queries answer `Some`.
///
/// [`LuxuryHouseBuilder`]: super::LuxuryHouseBuilder
#[derive(Debug, Default)]
pub struct EcoLuxuryHouseBuilder {
    house: House,
}

impl EcoLuxuryHouseBuilder {
    /// Create a builder with an empty house under construction.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HouseBuilder for EcoLuxuryHouseBuilder {
    fn reset(&mut self) {
        self.house = House::default();
    }

    fn set_walls(&mut self, material: &str) {
        self.house.walls = material.to_string();
    }

    fn set_door(&mut self, kind: &str) {
        self.house.door = kind.to_string();
    }

    fn set_windows(&mut self, count: u32) {
        self.house.windows = count;
    }

    fn set_roof(&mut self, kind: &str) {
        self.house.roof = kind.to_string();
    }

    fn take_product(&mut self) -> House {
        mem::take(&mut self.house)
    }

    fn luxury_features(&mut self) -> Option<&mut dyn LuxuryFeatures> {
        Some(self)
    }

    fn eco_features(&mut self) -> Option<&mut dyn EcoFeatures> {
        Some(self)
    }
}

impl LuxuryFeatures for EcoLuxuryHouseBuilder {
    fn add_swimming_pool(&mut self) {
        self.house.has_pool = true;
    }

    fn add_garden(&mut self) {
        self.house.has_garden = true;
    }
}

impl EcoFeatures for EcoLuxuryHouseBuilder {
    fn add_solar_panels(&mut self) {
        self.house.has_solar_panels = true;
    }
}
