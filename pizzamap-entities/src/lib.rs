#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # pizzamap-entities
//!
//! Reusable, agnostic domain entities for pizzamap.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod id;
pub mod marker;
pub mod pizzeria;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
