use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use strum::{Display, EnumString};
use tokio::task::{self, JoinHandle};

use super::*;
use crate::viewport::BboxEvents;

/// Decides which response is shown if searches overlap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ResponseOrdering {
    /// The response that arrives last is shown,
    /// even if it belongs to an older move.
    #[default]
    LastResolved,
    /// Responses of older moves are dropped once
    /// a newer one has been shown.
    LatestRequest,
}

/// Refreshes the listing on every viewport event.
pub struct ListingUpdates<G: ?Sized, V: ?Sized> {
    gateway: Rc<G>,
    view: Rc<RefCell<V>>,
    ordering: ResponseOrdering,
    // Generation of the last response that has been rendered.
    last_rendered: Rc<Cell<u64>>,
}

impl<G: ?Sized, V: ?Sized> Clone for ListingUpdates<G, V> {
    fn clone(&self) -> Self {
        Self {
            gateway: Rc::clone(&self.gateway),
            view: Rc::clone(&self.view),
            ordering: self.ordering,
            last_rendered: Rc::clone(&self.last_rendered),
        }
    }
}

impl<G, V> ListingUpdates<G, V>
where
    G: SearchGateway + ?Sized + 'static,
    V: ListingView + ?Sized + 'static,
{
    pub fn new(gateway: Rc<G>, view: Rc<RefCell<V>>, ordering: ResponseOrdering) -> Self {
        Self {
            gateway,
            view,
            ordering,
            last_rendered: Rc::new(Cell::new(0)),
        }
    }

    /// Handles events until the viewport is gone and
    /// all searches in flight have completed.
    ///
    /// Every event spawns its own search, so this must
    /// be run inside of a [`tokio::task::LocalSet`].
    pub async fn run(self, mut events: BboxEvents) {
        let mut generation = 0;
        let mut in_flight: Vec<JoinHandle<()>> = vec![];
        while let Some(bbox) = events.next().await {
            generation += 1;
            in_flight.retain(|task| !task.is_finished());
            in_flight.push(task::spawn_local(self.clone().update(generation, bbox)));
        }
        for task in in_flight {
            if let Err(err) = task.await {
                log::error!("Listing update aborted: {err}");
            }
        }
    }

    async fn update(self, generation: u64, bbox: MapBbox) {
        log::debug!("Search #{generation} inside of {bbox:?}");
        let hits = match search_extent(&*self.gateway, &bbox).await {
            Ok(hits) => hits,
            Err(err) => {
                log::error!("{err}");
                return;
            }
        };
        if self.ordering == ResponseOrdering::LatestRequest
            && generation <= self.last_rendered.get()
        {
            log::debug!("Discard stale response of search #{generation}");
            return;
        }
        self.last_rendered.set(generation);
        log::debug!("Show {} results of search #{generation}", hits.len());
        render_listing(&mut *self.view.borrow_mut(), &hits);
    }
}
