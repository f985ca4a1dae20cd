// Remote services the application talks to.
// Implementations live in the `pizzamap-gateways` crate,
// the tests use in-memory fakes.

use async_trait::async_trait;
use pizzamap_entities::{geo::MapBbox, pizzeria::Pizzeria};

/// Geographic range queries over the pizzeria collection.
#[async_trait(?Send)]
pub trait SearchGateway {
    /// All pizzerias inside of `bbox`, in the order of the search response.
    async fn search_extent(&self, bbox: &MapBbox) -> anyhow::Result<Vec<Pizzeria>>;
}

/// The authoritative record store.
#[async_trait(?Send)]
pub trait RecordStore {
    async fn list_records(&self) -> anyhow::Result<Vec<Pizzeria>>;
}
