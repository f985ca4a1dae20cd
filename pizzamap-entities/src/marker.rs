use crate::geo::MapPoint;

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub color: String,
    pub fill_opacity: f64,
    pub radius: u32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: "purple".into(),
            fill_opacity: 0.7,
            radius: 4,
        }
    }
}

/// A circle drawn on the map for a single record.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub pos: MapPoint,
    pub style: MarkerStyle,
}

impl Marker {
    pub fn at(pos: MapPoint) -> Self {
        Self {
            pos,
            style: MarkerStyle::default(),
        }
    }
}
