//! Gateways to the remote services pizzamap depends on.

pub mod kinto;
