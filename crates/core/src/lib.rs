//! Core currency logic for Cambio.
//!
//! This crate contains pure logic with ZERO configuration or logging
//! dependencies. Rate tables, monetary values, and their arithmetic live here.
//!
//! # Modules
//!
//! - `currency` - Exchange rate table and monetary values

pub mod currency;
