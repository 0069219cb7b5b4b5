//! Pattern 3: Builder
//! Example: House Construction
//!
//! Run with: cargo run --example p3_house_builder
//!
//! Set RUST_LOG=warn (or leave the default) to see the director's warning when
//! a recipe asks for more than the attached builder can do.

use colored::Colorize;
use creational_patterns::builder::{
    BasicHouseBuilder, Director, DirectorError, EcoLuxuryHouseBuilder, HouseBuilder,
    LuxuryHouseBuilder,
};

fn main() -> Result<(), DirectorError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut basic = BasicHouseBuilder::new();
    let mut luxury = LuxuryHouseBuilder::new();
    let mut eco = EcoLuxuryHouseBuilder::new();

    // One director drives all three builders through its recipes. Collecting
    // each product stays the client's job.
    let mut director = Director::new();
    director.set_builder(&mut basic);
    director.construct_simple()?;
    director.set_builder(&mut luxury);
    director.construct_luxury()?;
    director.set_builder(&mut eco);
    director.construct_luxury()?;

    println!("=== Simple house (basic builder) ===");
    println!("{}", basic.take_product());

    println!("\n=== Luxury house (luxury builder) ===");
    println!("{}", luxury.take_product());

    println!("\n=== Luxury house with solar panels (eco builder) ===");
    println!("{}", eco.take_product());

    // No director: the client calls the building steps directly.
    println!("\n=== Custom house, no director ===");
    let mut custom = LuxuryHouseBuilder::new();
    custom.set_walls("concrete");
    custom.set_door("metal");
    custom.set_windows(10);
    custom.set_roof("glass");
    if let Some(features) = custom.luxury_features() {
        features.add_swimming_pool();
    }
    println!("{}", custom.take_product());

    // The basic builder has no luxury steps: the director warns, skips the
    // recipe, and the simple house built first is untouched.
    println!("\n=== Luxury plans on the basic builder ===");
    let mut director = Director::new();
    director.set_builder(&mut basic);
    director.construct_simple()?;
    director.construct_luxury()?;
    println!("{}", basic.take_product());

    println!(
        "\n{}",
        "✓ A recipe beyond the builder's capabilities is a warning, not a failure".green()
    );
    Ok(())
}
