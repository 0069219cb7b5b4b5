//! Pattern 2: Abstract Factory
//! Example: Widget Families
//!
//! Run with: cargo run --example p2_widget_families

use colored::Colorize;
use creational_patterns::abstract_factory::Application;

fn render_for(selector: &str) {
    match Application::from_selector(selector) {
        Ok(app) => {
            for line in app.render() {
                println!("{line}");
            }
        }
        Err(err) => println!("{} {err}", "✗".red()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Application configured for Windows ===");
    render_for("Windows");

    println!("\n=== Application configured for Mac ===");
    render_for("Mac");

    // "Linux" names no widget family; the error carries the selector verbatim.
    println!("\n=== Application configured for Linux ===");
    render_for("Linux");

    println!(
        "\n{}",
        "✓ Each family rendered in one style; unknown platforms fail loudly".green()
    );
}
