use std::{num::ParseFloatError, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordRangeError {
    #[error("latitude {0} is out of range")]
    Latitude(f64),
    #[error("longitude {0} is out of range")]
    Longitude(f64),
}

/// Latitude in degrees, always within `[-90, 90]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const MIN_DEG: f64 = -90.0;
    const MAX_DEG: f64 = 90.0;

    pub const fn min() -> Self {
        Self(Self::MIN_DEG)
    }

    pub const fn max() -> Self {
        Self(Self::MAX_DEG)
    }

    pub fn try_from_deg(deg: f64) -> Result<Self, CoordRangeError> {
        if (Self::MIN_DEG..=Self::MAX_DEG).contains(&deg) {
            Ok(Self(deg))
        } else {
            Err(CoordRangeError::Latitude(deg))
        }
    }

    /// Values outside of the valid range are clamped,
    /// `NaN` becomes `0`.
    pub fn from_deg_clamped(deg: f64) -> Self {
        if deg.is_nan() {
            return Self::default();
        }
        Self(deg.clamp(Self::MIN_DEG, Self::MAX_DEG))
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }
}

/// Longitude in degrees, always within `[-180, 180]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const MIN_DEG: f64 = -180.0;
    const MAX_DEG: f64 = 180.0;

    pub const fn min() -> Self {
        Self(Self::MIN_DEG)
    }

    pub const fn max() -> Self {
        Self(Self::MAX_DEG)
    }

    pub fn try_from_deg(deg: f64) -> Result<Self, CoordRangeError> {
        if (Self::MIN_DEG..=Self::MAX_DEG).contains(&deg) {
            Ok(Self(deg))
        } else {
            Err(CoordRangeError::Longitude(deg))
        }
    }

    /// Values outside of the valid range are clamped,
    /// `NaN` becomes `0`.
    pub fn from_deg_clamped(deg: f64) -> Self {
        if deg.is_nan() {
            return Self::default();
        }
        Self(deg.clamp(Self::MIN_DEG, Self::MAX_DEG))
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, CoordRangeError> {
        let lat = LatCoord::try_from_deg(lat)?;
        let lng = LngCoord::try_from_deg(lng)?;
        Ok(Self::new(lat, lng))
    }

    /// Creates a point from degrees, clamping both coordinates
    /// into their valid range.
    pub fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self::new(LatCoord::from_deg_clamped(lat), LngCoord::from_deg_clamped(lng))
    }

    pub const fn lat(&self) -> LatCoord {
        self.lat
    }

    pub const fn lng(&self) -> LngCoord {
        self.lng
    }

    pub const fn to_lat_lng_deg(&self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }
}

/// A rectangular map area given by its north-west
/// and south-east corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapBbox {
    northwest: MapPoint,
    southeast: MapPoint,
}

impl MapBbox {
    pub const fn new(northwest: MapPoint, southeast: MapPoint) -> Self {
        Self {
            northwest,
            southeast,
        }
    }

    pub const fn northwest(&self) -> MapPoint {
        self.northwest
    }

    pub const fn southeast(&self) -> MapPoint {
        self.southeast
    }

    pub fn is_valid(&self) -> bool {
        self.northwest.lat() >= self.southeast.lat()
    }

    /// A bbox crossing the antimeridian has its west edge
    /// east of its east edge.
    pub fn contains_point(&self, pt: MapPoint) -> bool {
        let lat = pt.lat();
        if lat < self.southeast.lat() || lat > self.northwest.lat() {
            return false;
        }
        let lng = pt.lng();
        let (west, east) = (self.northwest.lng(), self.southeast.lng());
        if west <= east {
            west <= lng && lng <= east
        } else {
            west <= lng || lng <= east
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BboxParseError {
    #[error("expected 4 comma separated coordinates, found {0}")]
    Count(usize),
    #[error(transparent)]
    Number(#[from] ParseFloatError),
    #[error(transparent)]
    Range(#[from] CoordRangeError),
    #[error("north-west corner is south of the south-east corner")]
    Inverted,
}

/// Parses `"nw_lat,nw_lng,se_lat,se_lng"`.
impl FromStr for MapBbox {
    type Err = BboxParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = s
            .split(',')
            .map(|x| x.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()?;
        let [nw_lat, nw_lng, se_lat, se_lng] = c[..] else {
            return Err(BboxParseError::Count(c.len()));
        };
        let bbox = Self::new(
            MapPoint::try_from_lat_lng_deg(nw_lat, nw_lng)?,
            MapPoint::try_from_lat_lng_deg(se_lat, se_lng)?,
        );
        if !bbox.is_valid() {
            return Err(BboxParseError::Inverted);
        }
        Ok(bbox)
    }
}
