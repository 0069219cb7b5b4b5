//! # Creational Design Patterns in Rust
//!
//! This crate contains worked examples of the three classic creational patterns,
//! each in its own small domain:
//!
//! ## Pattern 1: Factory Method
//! - A creator trait whose factory method decides the concrete product
//! - Transport logistics: road logistics makes trucks, sea logistics makes ships
//! - A provided `plan_delivery` method that only ever sees the product trait
//!
//! ## Pattern 2: Abstract Factory
//! - One factory trait producing a whole family of related widgets
//! - Windows and macOS widget sets that are never mixed
//! - A typed platform selector; an unrecognized selector is a hard error
//!
//! ## Pattern 3: Builder
//! - Step-by-step construction of a mutable product record
//! - Builder variants that advertise optional steps through capability queries
//!   instead of downcasting
//! - A Director that drives fixed step sequences but never extracts the product
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Factory Method
//! cargo run --example p1_transport_logistics
//!
//! # Pattern 2: Abstract Factory
//! cargo run --example p2_widget_families
//!
//! # Pattern 3: Builder
//! cargo run --example p3_house_builder
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the custom error types
//! - `log` - Warning-level notifications (see `builder::Director::construct_luxury`)

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
