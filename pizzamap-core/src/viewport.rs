//! Headless map viewport.
//!
//! Keeps track of center, zoom and pixel size of a slippy map
//! and derives the visible bounding box with the spherical
//! Web-Mercator projection that tile based maps use.
//! Every finished load or move is published as a [`MapBbox`].

use std::f64::consts::PI;

use pizzamap_entities::geo::*;
use tokio::sync::mpsc;

const TILE_SIZE: f64 = 256.0;

pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 18;

// Web-Mercator is undefined at the poles.
const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_6;

/// Rome
pub const DEFAULT_CENTER: (f64, f64) = (41.8, 12.5);
pub const DEFAULT_ZOOM: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: MapPoint,
    pub zoom: u8,
    pub size: ViewportSize,
}

impl MapView {
    pub fn bounds(&self) -> MapBbox {
        let world = world_size(self.zoom);
        let (cx, cy) = project(self.center, world);
        let half_width = f64::from(self.size.width) / 2.0;
        let half_height = f64::from(self.size.height) / 2.0;
        MapBbox::new(
            unproject(cx - half_width, cy - half_height, world),
            unproject(cx + half_width, cy + half_height, world),
        )
    }
}

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2_f64.powi(i32::from(zoom))
}

fn project(pt: MapPoint, world: f64) -> (f64, f64) {
    let (lat, lng) = pt.to_lat_lng_deg();
    let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    let x = (lng + 180.0) / 360.0 * world;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * world;
    (x, y)
}

fn unproject(x: f64, y: f64, world: f64) -> MapPoint {
    let lng = x / world * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * y / world)).sinh().atan().to_degrees();
    MapPoint::from_lat_lng_deg(lat, lng)
}

/// The stream of bounding boxes of finished load and move events.
///
/// There is only a single subscription per viewport and
/// it cannot be restarted.
#[derive(Debug)]
pub struct BboxEvents(mpsc::UnboundedReceiver<MapBbox>);

impl BboxEvents {
    /// Returns `None` as soon as the viewport is gone.
    pub async fn next(&mut self) -> Option<MapBbox> {
        self.0.recv().await
    }
}

#[derive(Debug)]
pub struct MapViewport {
    size: ViewportSize,
    view: Option<MapView>,
    tx: mpsc::UnboundedSender<MapBbox>,
    rx: Option<mpsc::UnboundedReceiver<MapBbox>>,
}

impl MapViewport {
    pub fn new(size: ViewportSize) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            size,
            view: None,
            tx,
            rx: Some(rx),
        }
    }

    /// Events emitted before subscribing are buffered.
    pub fn subscribe(&mut self) -> Option<BboxEvents> {
        self.rx.take().map(BboxEvents)
    }

    /// `None` until the first view has been set.
    pub const fn view(&self) -> Option<&MapView> {
        self.view.as_ref()
    }

    pub fn bounds(&self) -> Option<MapBbox> {
        self.view.as_ref().map(MapView::bounds)
    }

    pub fn set_view(&mut self, center: MapPoint, zoom: u8) {
        let loaded = self.view.is_some();
        self.view = Some(MapView {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            size: self.size,
        });
        if loaded {
            log::debug!("Map moved");
        } else {
            log::debug!("Map loaded");
        }
        self.emit();
    }

    pub fn pan_by(&mut self, dlat: f64, dlng: f64) {
        if !(dlat.is_finite() && dlng.is_finite()) {
            log::warn!("Cannot pan by ({dlat}, {dlng})");
            return;
        }
        let Some(view) = self.view else {
            log::warn!("Cannot pan before the map has been loaded");
            return;
        };
        let (lat, lng) = view.center.to_lat_lng_deg();
        self.set_view(MapPoint::from_lat_lng_deg(lat + dlat, lng + dlng), view.zoom);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(1);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(-1);
    }

    fn zoom_by(&mut self, delta: i8) {
        let Some(view) = self.view else {
            log::warn!("Cannot zoom before the map has been loaded");
            return;
        };
        self.set_view(view.center, view.zoom.saturating_add_signed(delta));
    }

    /// Centers the map on `bbox` with the highest zoom
    /// level that still shows all of it.
    pub fn fit_bounds(&mut self, bbox: &MapBbox) {
        let (west, north) = project(bbox.northwest(), 1.0);
        let (east, south) = project(bbox.southeast(), 1.0);
        let (dx, dy) = ((east - west).abs(), (south - north).abs());
        let width = f64::from(self.size.width);
        let height = f64::from(self.size.height);
        let zoom = (MIN_ZOOM..=MAX_ZOOM)
            .rev()
            .find(|&z| {
                let world = world_size(z);
                dx * world <= width && dy * world <= height
            })
            .unwrap_or(MIN_ZOOM);
        let center = unproject((west + east) / 2.0, (north + south) / 2.0, 1.0);
        self.set_view(center, zoom);
    }

    fn emit(&self) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        if self.tx.send(bounds).is_err() {
            log::debug!("Viewport events are not observed anymore");
        }
    }
}
