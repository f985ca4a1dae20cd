use std::cell::RefCell;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::oneshot;

use self::prelude::*;

pub mod prelude {
    pub use crate::{display::*, gateways::*, usecases::*, viewport::*};
    pub use pizzamap_entities::{builders::*, geo::*, marker::*, pizzeria::*};

    pub use super::{FakeRecordStore, ScriptedSearch, SearchResponder};

    pub fn rome() -> MapPoint {
        let (lat, lng) = DEFAULT_CENTER;
        MapPoint::from_lat_lng_deg(lat, lng)
    }

    pub fn pizzeria(name: &str) -> Pizzeria {
        Pizzeria::build().name(name).pos(rome()).finish()
    }

    /// Lets all local tasks that are ready make progress.
    pub async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }
}

pub struct FakeRecordStore {
    records: Option<Vec<Pizzeria>>,
}

impl FakeRecordStore {
    pub fn new(records: Vec<Pizzeria>) -> Self {
        Self {
            records: Some(records),
        }
    }

    pub fn failing() -> Self {
        Self { records: None }
    }
}

#[async_trait(?Send)]
impl RecordStore for FakeRecordStore {
    async fn list_records(&self) -> anyhow::Result<Vec<Pizzeria>> {
        self.records
            .clone()
            .ok_or_else(|| anyhow!("Connection refused"))
    }
}

pub type SearchResponder = oneshot::Sender<anyhow::Result<Vec<Pizzeria>>>;

/// A search gateway whose responses are sent by the test.
#[derive(Default)]
pub struct ScriptedSearch {
    pending: RefCell<Vec<(MapBbox, oneshot::Receiver<anyhow::Result<Vec<Pizzeria>>>)>>,
}

impl ScriptedSearch {
    pub fn expect(&self, bbox: MapBbox) -> SearchResponder {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push((bbox, rx));
        tx
    }
}

#[async_trait(?Send)]
impl SearchGateway for ScriptedSearch {
    async fn search_extent(&self, bbox: &MapBbox) -> anyhow::Result<Vec<Pizzeria>> {
        let response = {
            let mut pending = self.pending.borrow_mut();
            let index = pending
                .iter()
                .position(|(expected, _)| expected == bbox)
                .ok_or_else(|| anyhow!("Unexpected search inside of {bbox:?}"))?;
            pending.remove(index).1
        };
        response.await?
    }
}
