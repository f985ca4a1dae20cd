use std::{cell::RefCell, rc::Rc};

use pizzamap_entities::marker::Marker;

/// The region that shows the names of the visible pizzerias.
pub trait ListingView {
    /// Replaces all entries at once.
    fn replace_entries(&mut self, entries: Vec<String>);
}

pub trait MarkerLayer {
    fn add_marker(&mut self, marker: Marker);
}

/// Markers can be added while the layer is shared with
/// others, the layer is only borrowed for each single marker.
impl<L: MarkerLayer + ?Sized> MarkerLayer for Rc<RefCell<L>> {
    fn add_marker(&mut self, marker: Marker) {
        self.borrow_mut().add_marker(marker);
    }
}

/// In-memory listing.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Listing {
    entries: Vec<String>,
}

impl Listing {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl ListingView for Listing {
    fn replace_entries(&mut self, entries: Vec<String>) {
        self.entries = entries;
    }
}

/// In-memory marker layer.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Markers {
    markers: Vec<Marker>,
}

impl Markers {
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl MarkerLayer for Markers {
    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }
}
