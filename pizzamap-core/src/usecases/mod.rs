use crate::{display::*, gateways::*};
use pizzamap_entities::{geo::*, marker::*, pizzeria::*};

mod error;
mod listing_updates;
mod load_markers;
mod render_listing;
mod search_extent;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    error::Error, listing_updates::*, load_markers::*, render_listing::*, search_extent::*,
};
