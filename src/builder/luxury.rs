use std::mem;

use super::{House, HouseBuilder, LuxuryFeatures};

/// Builder for a luxury house: the core steps plus pool and garden.
#[derive(Debug, Default)]
pub struct LuxuryHouseBuilder {
    house: House,
}

impl LuxuryHouseBuilder {
    /// Create a builder with an empty house under construction.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HouseBuilder for LuxuryHouseBuilder {
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
}

impl LuxuryFeatures for LuxuryHouseBuilder {
    fn add_swimming_pool(&mut self) {
        self.house.has_pool = true;
    }

    fn add_garden(&mut self) {
        self.house.has_garden = true;
    }
}
