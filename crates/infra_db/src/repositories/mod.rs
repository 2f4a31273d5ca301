//! Repository implementations
//!
//! Concrete data access for the billing system. Each repository owns the SQL
//! for one aggregate and maps rows to domain types.

pub mod tariff;
