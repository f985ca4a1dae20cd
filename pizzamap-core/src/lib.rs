//! # pizzamap-core
//!
//! Keeps the listing of a map in sync with what is visible:
//! viewport events trigger searches whose results are rendered,
//! while markers for all records are placed once at startup.

pub mod bbox;
pub mod display;
pub mod gateways;
pub mod usecases;
pub mod viewport;
