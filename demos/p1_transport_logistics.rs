//! Pattern 1: Factory Method
//! Example: Transport Logistics
//!
//! Run with: cargo run --example p1_transport_logistics

use colored::Colorize;
use creational_patterns::factory_method::{Logistics, RoadLogistics, SeaLogistics};

fn plan_with(logistics: &dyn Logistics) {
    println!("{}", logistics.plan_delivery());
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Road logistics ===");
    plan_with(&RoadLogistics);

    println!("\n=== Sea logistics ===");
    plan_with(&SeaLogistics);

    // plan_with never names Truck or Ship; swapping the creator swaps the
    // whole delivery chain.
    println!(
        "\n{}",
        "✓ Deliveries planned without naming a transport type".green()
    );
}
