//! Text based stand-ins for the map widget and the listing.

use std::{
    io::{self, Write},
    num::{ParseFloatError, ParseIntError},
    str::FromStr,
};

use pizzamap_core::{display::ListingView, viewport::MapViewport};
use pizzamap_entities::geo::{BboxParseError, CoordRangeError, MapBbox, MapPoint};
use thiserror::Error;

/// Prints the listing as a bullet list.
pub struct TerminalListing<W> {
    out: W,
}

impl TerminalListing<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalListing<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    fn write_entries(&mut self, entries: &[String]) -> io::Result<()> {
        writeln!(self.out, "{} pizzerias", entries.len())?;
        for entry in entries {
            writeln!(self.out, "  - {entry}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> ListingView for TerminalListing<W> {
    fn replace_entries(&mut self, entries: Vec<String>) {
        if let Err(err) = self.write_entries(&entries) {
            log::warn!("Could not print the listing: {err}");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavCommandParseError {
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("Missing {0}")]
    MissingArgument(&'static str),
    #[error("Too many arguments")]
    TooManyArguments,
    #[error(transparent)]
    Number(#[from] ParseFloatError),
    #[error("{0} is not a finite number")]
    NotFinite(f64),
    #[error(transparent)]
    Zoom(#[from] ParseIntError),
    #[error(transparent)]
    Coord(#[from] CoordRangeError),
    #[error(transparent)]
    Bbox(#[from] BboxParseError),
}

/// Navigation of the map viewport.
#[derive(Debug, Clone, PartialEq)]
pub enum NavCommand {
    Pan { dlat: f64, dlng: f64 },
    ZoomIn,
    ZoomOut,
    View { center: MapPoint, zoom: Option<u8> },
    Fit(MapBbox),
    Quit,
}

impl NavCommand {
    /// Applies the command and returns `false` on [`NavCommand::Quit`].
    pub fn apply(&self, viewport: &mut MapViewport) -> bool {
        match self {
            Self::Pan { dlat, dlng } => viewport.pan_by(*dlat, *dlng),
            Self::ZoomIn => viewport.zoom_in(),
            Self::ZoomOut => viewport.zoom_out(),
            Self::View { center, zoom } => {
                let zoom = zoom
                    .or_else(|| viewport.view().map(|v| v.zoom))
                    .unwrap_or(pizzamap_core::viewport::DEFAULT_ZOOM);
                viewport.set_view(*center, zoom);
            }
            Self::Fit(bbox) => viewport.fit_bounds(bbox),
            Self::Quit => return false,
        }
        true
    }
}

impl FromStr for NavCommand {
    type Err = NavCommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut args = s.split_whitespace();
        let Some(name) = args.next() else {
            return Err(NavCommandParseError::MissingArgument("command"));
        };
        let mut next = |what| args.next().ok_or(NavCommandParseError::MissingArgument(what));
        let cmd = match name {
            "pan" => Self::Pan {
                dlat: parse_offset(next("latitude offset")?)?,
                dlng: parse_offset(next("longitude offset")?)?,
            },
            "zoom" => match next("'in' or 'out'")? {
                "in" | "+" => Self::ZoomIn,
                "out" | "-" => Self::ZoomOut,
                other => return Err(NavCommandParseError::Unknown(format!("zoom {other}"))),
            },
            "view" => {
                let lat = next("latitude")?.parse::<f64>()?;
                let lng = next("longitude")?.parse::<f64>()?;
                let center = MapPoint::try_from_lat_lng_deg(lat, lng)?;
                let zoom = args.next().map(str::parse::<u8>).transpose()?;
                Self::View { center, zoom }
            }
            "fit" => Self::Fit(next("bounding box")?.parse()?),
            "quit" | "q" | "exit" => Self::Quit,
            other => return Err(NavCommandParseError::Unknown(other.to_owned())),
        };
        if args.next().is_some() {
            return Err(NavCommandParseError::TooManyArguments);
        }
        Ok(cmd)
    }
}

fn parse_offset(s: &str) -> Result<f64, NavCommandParseError> {
    let offset = s.parse::<f64>()?;
    if !offset.is_finite() {
        return Err(NavCommandParseError::NotFinite(offset));
    }
    Ok(offset)
}
