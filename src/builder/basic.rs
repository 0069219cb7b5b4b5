use std::mem;

use super::{House, HouseBuilder};

/// Builder for a standard house: the four core steps and nothing else.
///
/// The luxury-only steps are unreachable on this type: it does not implement
/// the capability traits, and both capability queries answer `None`.
#[derive(Debug, Default)]
pub struct BasicHouseBuilder {
    house: House,
}

impl BasicHouseBuilder {
    /// Create a builder with an empty house under construction.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HouseBuilder for BasicHouseBuilder {
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
        // Move the finished house out; a fresh empty one takes its place.
        mem::take(&mut self.house)
    }
}
