use std::{cell::RefCell, io::Write, rc::Rc};

use anyhow::{anyhow, Result};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    task,
};

use pizzamap_core::{
    bbox::InBBox,
    display::{ListingView, Markers},
    gateways::{RecordStore, SearchGateway},
    usecases::{self, ListingUpdates, ResponseOrdering},
    viewport::MapViewport,
};
use pizzamap_entities::geo::MapBbox;

use crate::{adapters::terminal::NavCommand, config};

/// Places the markers and refreshes the listing on every
/// move of the map until `input` is exhausted or asks to quit.
///
/// Must be run inside of a [`tokio::task::LocalSet`].
/// Returns the number of markers on the map.
pub async fn run_map<G, V, R>(
    map: &config::Map,
    ordering: ResponseOrdering,
    gateway: Rc<G>,
    listing: Rc<RefCell<V>>,
    input: R,
) -> Result<usize>
where
    G: SearchGateway + RecordStore + 'static,
    V: ListingView + 'static,
    R: AsyncBufRead + Unpin,
{
    let mut viewport = MapViewport::new(map.size);
    let events = viewport
        .subscribe()
        .ok_or_else(|| anyhow!("Viewport events are already observed"))?;

    let markers = Rc::new(RefCell::new(Markers::default()));
    let loader = task::spawn_local({
        let store = Rc::clone(&gateway);
        let mut layer = Rc::clone(&markers);
        async move {
            if let Err(err) = usecases::load_markers(&*store, &mut layer).await {
                log::error!("{err}");
            }
        }
    });
    let updates = task::spawn_local(ListingUpdates::new(gateway, listing, ordering).run(events));

    viewport.set_view(map.center, map.zoom);

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let cmd = match line.parse::<NavCommand>() {
            Ok(cmd) => cmd,
            Err(err) => {
                log::warn!("{err}");
                continue;
            }
        };
        if !cmd.apply(&mut viewport) {
            break;
        }
        if let Some(bounds) = viewport.bounds() {
            let visible = markers
                .borrow()
                .markers()
                .iter()
                .filter(|m| m.in_bbox(&bounds))
                .count();
            log::info!("{visible} markers in view");
        }
    }

    // Closes the event stream
    drop(viewport);
    loader.await?;
    updates.await?;

    let count = markers.borrow().len();
    Ok(count)
}

pub async fn search_once<G, V>(gateway: &G, listing: &mut V, bbox: &MapBbox) -> Result<()>
where
    G: SearchGateway + ?Sized,
    V: ListingView + ?Sized,
{
    usecases::refresh_listing(gateway, listing, bbox).await?;
    Ok(())
}

/// Writes one `lat,lng` line per marker.
pub async fn print_markers<S, W>(store: &S, mut out: W) -> Result<usize>
where
    S: RecordStore + ?Sized,
    W: Write,
{
    let mut markers = Markers::default();
    let count = usecases::load_markers(store, &mut markers).await?;
    for marker in markers.markers() {
        let (lat, lng) = marker.pos.to_lat_lng_deg();
        writeln!(out, "{lat},{lng}")?;
    }
    out.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pizzamap_core::display::Listing;
    use pizzamap_entities::{builders::*, geo::MapPoint, pizzeria::Pizzeria};
    use tokio::task::LocalSet;

    struct FakeKinto {
        pizzerias: Vec<Pizzeria>,
        broken: bool,
    }

    impl FakeKinto {
        fn with_pizzerias() -> Self {
            Self {
                pizzerias: vec![
                    Pizzeria::build().name("Da Remo").lat_lng(41.88, 12.47).finish(),
                    Pizzeria::build().lat_lng(41.9, 12.4).finish(),
                    Pizzeria::build().name("Da Michele").lat_lng(40.85, 14.26).finish(),
                ],
                broken: false,
            }
        }

        fn broken() -> Self {
            Self {
                broken: true,
                ..Self::with_pizzerias()
            }
        }
    }

    #[async_trait(?Send)]
    impl SearchGateway for FakeKinto {
        async fn search_extent(&self, bbox: &MapBbox) -> anyhow::Result<Vec<Pizzeria>> {
            if self.broken {
                return Err(anyhow!("connection refused"));
            }
            Ok(self
                .pizzerias
                .iter()
                .filter(|p| p.in_bbox(bbox))
                .cloned()
                .collect())
        }
    }

    #[async_trait(?Send)]
    impl RecordStore for FakeKinto {
        async fn list_records(&self) -> anyhow::Result<Vec<Pizzeria>> {
            if self.broken {
                return Err(anyhow!("connection refused"));
            }
            Ok(self.pizzerias.clone())
        }
    }

    fn rome() -> config::Map {
        config::Map {
            center: MapPoint::from_lat_lng_deg(41.8, 12.5),
            zoom: 9,
            size: Default::default(),
        }
    }

    async fn run(kinto: FakeKinto, input: &str) -> (usize, Vec<String>) {
        let listing = Rc::new(RefCell::new(Listing::default()));
        let count = LocalSet::new()
            .run_until(run_map(
                &rome(),
                ResponseOrdering::LatestRequest,
                Rc::new(kinto),
                Rc::clone(&listing),
                input.as_bytes(),
            ))
            .await
            .unwrap();
        let entries = listing.borrow().entries().to_vec();
        (count, entries)
    }

    #[tokio::test]
    async fn show_pizzerias_around_rome_on_load() {
        let (count, entries) = run(FakeKinto::with_pizzerias(), "").await;
        assert_eq!(count, 3);
        assert_eq!(entries, vec!["Da Remo", "(No name)"]);
    }

    #[tokio::test]
    async fn refresh_listing_after_moving() {
        let (_, entries) = run(
            FakeKinto::with_pizzerias(),
            "zoom out\nbogus\n\nview 40.85 14.27 12\n",
        )
        .await;
        assert_eq!(entries, vec!["Da Michele"]);
    }

    #[tokio::test]
    async fn stop_on_quit() {
        let (_, entries) = run(
            FakeKinto::with_pizzerias(),
            "quit\nview 40.85 14.27 12\n",
        )
        .await;
        assert_eq!(entries, vec!["Da Remo", "(No name)"]);
    }

    #[tokio::test]
    async fn keep_running_without_backend() {
        let (count, entries) = run(FakeKinto::broken(), "zoom in\n").await;
        assert_eq!(count, 0);
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn search_inside_bbox() {
        let mut listing = Listing::default();
        let bbox = "41,14,40,15".parse().unwrap();
        search_once(&FakeKinto::with_pizzerias(), &mut listing, &bbox)
            .await
            .unwrap();
        assert_eq!(listing.entries(), ["Da Michele"]);
        assert!(search_once(&FakeKinto::broken(), &mut listing, &bbox)
            .await
            .is_err());
        assert_eq!(listing.entries(), ["Da Michele"]);
    }

    #[tokio::test]
    async fn print_marker_positions() {
        let mut out = Vec::new();
        let count = print_markers(&FakeKinto::with_pizzerias(), &mut out)
            .await
            .unwrap();
        assert_eq!(count, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "41.88,12.47\n41.9,12.4\n40.85,14.26\n"
        );
    }
}
