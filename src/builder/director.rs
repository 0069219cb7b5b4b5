use thiserror::Error;

use super::HouseBuilder;

/// Failure cases for driving a [`Director`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectorError {
    #[error("no builder attached to the director")]
    NoBuilder,
}

/// Drives a builder through fixed, named step sequences.
///
/// The director borrows whichever builder it is pointed at and decides *how*
/// to build; it never calls
/// [`take_product`](HouseBuilder::take_product), so *when* to collect the
/// result stays with the caller. Re-targeting the director with
/// [`set_builder`](Director::set_builder) leaves the previously attached
/// builder's work in progress untouched.
#[derive(Default)]
pub struct Director<'a> {
    builder: Option<&'a mut dyn HouseBuilder>,
}

impl<'a> Director<'a> {
    /// Create a director with no builder attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the director at a builder. Replaces any previous association.
    pub fn set_builder(&mut self, builder: &'a mut dyn HouseBuilder) {
        self.builder = Some(builder);
    }

    /// Build a simple house: brick walls, a wooden door, four windows and a
    /// shingled roof, always in that order after a reset.
    pub fn construct_simple(&mut self) -> Result<(), DirectorError> {
        let builder = self.builder.as_deref_mut().ok_or(DirectorError::NoBuilder)?;
        builder.reset();
        builder.set_walls("brick");
        builder.set_door("wooden");
        builder.set_windows(4);
        builder.set_roof("shingles");
        Ok(())
    }

    /// Build a luxury house: stone walls, a double-glazed door, six windows, a
    /// slate roof, a swimming pool and a garden, plus solar panels when the
    /// builder also has the eco capability.
    ///
    /// A builder without the luxury capability is left exactly as it was: the
    /// director logs a warning and performs no construction step at all. That
    /// is a skip, not a failure.
    pub fn construct_luxury(&mut self) -> Result<(), DirectorError> {
        let builder = self.builder.as_deref_mut().ok_or(DirectorError::NoBuilder)?;

        // Probe before touching the builder so a skip leaves no trace.
        if builder.luxury_features().is_none() {
            log::warn!("luxury features not available with the current builder");
            return Ok(());
        }

        builder.reset();
        builder.set_walls("stone");
        builder.set_door("double-glazed");
        builder.set_windows(6);
        builder.set_roof("slate");
        if let Some(luxury) = builder.luxury_features() {
            luxury.add_swimming_pool();
            luxury.add_garden();
        }
        if let Some(eco) = builder.eco_features() {
            eco.add_solar_panels();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::{
        BasicHouseBuilder, EcoFeatures, EcoLuxuryHouseBuilder, House, LuxuryHouseBuilder,
    };
    use super::*;

    // Advertises the eco capability without the luxury one. No shipped builder
    // does this, but user-written variants can.
    #[derive(Default)]
    struct SolarOnlyBuilder {
        house: House,
    }

    impl HouseBuilder for SolarOnlyBuilder {
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
            std::mem::take(&mut self.house)
        }

        fn eco_features(&mut self) -> Option<&mut dyn EcoFeatures> {
            Some(self)
        }
    }

    impl EcoFeatures for SolarOnlyBuilder {
        fn add_solar_panels(&mut self) {
            self.house.has_solar_panels = true;
        }
    }

    #[test]
    fn test_construct_simple_drives_the_fixed_sequence() {
        let mut builder = BasicHouseBuilder::new();
        let mut director = Director::new();
        director.set_builder(&mut builder);
        director.construct_simple().unwrap();

        let house = builder.take_product();
        assert_eq!(house.walls, "brick");
        assert_eq!(house.door, "wooden");
        assert_eq!(house.windows, 4);
        assert_eq!(house.roof, "shingles");
        assert!(!house.has_pool);
        assert!(!house.has_garden);
    }

    #[test]
    fn test_construct_simple_restarts_from_scratch() {
        let mut builder = BasicHouseBuilder::new();
        builder.set_windows(99);

        let mut director = Director::new();
        director.set_builder(&mut builder);
        director.construct_simple().unwrap();

        assert_eq!(builder.take_product().windows, 4);
    }

    #[test]
    fn test_construct_luxury_on_a_luxury_builder() {
        let mut builder = LuxuryHouseBuilder::new();
        let mut director = Director::new();
        director.set_builder(&mut builder);
        director.construct_luxury().unwrap();

        let house = builder.take_product();
        assert_eq!(house.walls, "stone");
        assert_eq!(house.door, "double-glazed");
        assert_eq!(house.windows, 6);
        assert_eq!(house.roof, "slate");
        assert!(house.has_pool);
        assert!(house.has_garden);
        assert!(!house.has_solar_panels);
    }

    #[test]
    fn test_construct_luxury_on_an_eco_builder_adds_solar_panels() {
        let mut builder = EcoLuxuryHouseBuilder::new();
        let mut director = Director::new();
        director.set_builder(&mut builder);
        director.construct_luxury().unwrap();

        let house = builder.take_product();
        assert_eq!(house.windows, 6);
        assert!(house.has_pool);
        assert!(house.has_garden);
        assert!(house.has_solar_panels);
    }

    #[test]
    fn test_construct_luxury_skips_a_builder_without_the_capability() {
        let mut builder = BasicHouseBuilder::new();
        let mut director = Director::new();
        director.set_builder(&mut builder);

        // A warning, not an error, and no construction step runs.
        assert_eq!(director.construct_luxury(), Ok(()));
        assert_eq!(builder.take_product(), House::default());
    }

    #[test]
    fn test_skipped_luxury_construction_preserves_existing_work() {
        let mut builder = BasicHouseBuilder::new();
        builder.set_walls("brick");

        let mut director = Director::new();
        director.set_builder(&mut builder);
        director.construct_luxury().unwrap();

        assert_eq!(builder.take_product().walls, "brick");
    }

    // The luxury gate ignores the eco capability on its own.
    #[test]
    fn test_construct_luxury_skips_an_eco_only_builder() {
        let mut builder = SolarOnlyBuilder::default();
        builder.set_walls("brick");
        assert!(builder.eco_features().is_some());
        assert!(builder.luxury_features().is_none());

        let mut director = Director::new();
        director.set_builder(&mut builder);
        assert_eq!(director.construct_luxury(), Ok(()));

        let house = builder.take_product();
        assert_eq!(house.walls, "brick");
        assert!(!house.has_solar_panels);
    }

    #[test]
    fn test_construction_without_a_builder_fails() {
        let mut director = Director::new();
        assert_eq!(director.construct_simple(), Err(DirectorError::NoBuilder));
        assert_eq!(director.construct_luxury(), Err(DirectorError::NoBuilder));
    }

    #[test]
    fn test_replacing_the_builder_discards_no_state() {
        let mut basic = BasicHouseBuilder::new();
        let mut luxury = LuxuryHouseBuilder::new();

        let mut director = Director::new();
        director.set_builder(&mut basic);
        director.construct_simple().unwrap();
        director.set_builder(&mut luxury);
        director.construct_luxury().unwrap();

        // The first builder still holds the simple house it was driven through.
        let simple = basic.take_product();
        assert_eq!(simple.walls, "brick");
        let lux = luxury.take_product();
        assert_eq!(lux.walls, "stone");
    }

    #[test]
    fn test_director_never_extracts_the_product() {
        let mut builder = LuxuryHouseBuilder::new();
        let mut director = Director::new();
        director.set_builder(&mut builder);
        director.construct_luxury().unwrap();

        // The built house is still inside the builder, waiting for the caller.
        let house = builder.take_product();
        assert_ne!(house, House::default());
        assert_eq!(builder.take_product(), House::default());
    }

    #[test]
    fn test_no_builder_error_message() {
        assert_eq!(
            DirectorError::NoBuilder.to_string(),
            "no builder attached to the director"
        );
    }
}
