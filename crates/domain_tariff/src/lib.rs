//! Tariff Domain - Pricing Configuration and Bill Calculation
//!
//! This crate holds the business rules of the billing system:
//! - The pricing configuration value object and its validation rules
//! - The bill calculator, a pure transformation from a unit count and a
//!   configuration to an itemized monetary breakdown
//!
//! All monetary arithmetic uses `rust_decimal` fixed-point values to avoid
//! binary floating-point rounding artifacts.
//!
//! # Example
//!
//! ```rust
//! use domain_tariff::{PricingConfig, calculate_bill};
//! use rust_decimal_macros::dec;
//!
//! let config = PricingConfig::default_tariff();
//! let bill = calculate_bill(dec!(100), &config).unwrap();
//! assert_eq!(bill.total, dec!(625.00));
//! ```

pub mod calculator;
pub mod config;
pub mod error;

pub use calculator::{calculate_bill, BillBreakdown};
pub use config::{PricingConfig, PricingConfigUpdate};
pub use error::TariffError;
