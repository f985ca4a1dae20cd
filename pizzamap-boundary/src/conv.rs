use super::*;
use pizzamap_entities as e;

/// Formats a bbox as `"nw.lat,nw.lng,se.lat,se.lng"`.
pub fn bbox_string(bbox: &e::geo::MapBbox) -> String {
    let (nw_lat, nw_lng) = bbox.northwest().to_lat_lng_deg();
    let (se_lat, se_lng) = bbox.southeast().to_lat_lng_deg();
    [nw_lat, nw_lng, se_lat, se_lng]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl From<&e::geo::MapBbox> for SearchQuery {
    fn from(bbox: &e::geo::MapBbox) -> Self {
        Self {
            inside_bounding_box: bbox_string(bbox),
            query: None,
            hits_per_page: None,
        }
    }
}

impl TryFrom<GeoLoc> for e::geo::MapPoint {
    type Error = e::geo::CoordRangeError;

    fn try_from(from: GeoLoc) -> Result<Self, Self::Error> {
        let GeoLoc { lat, lng } = from;
        Self::try_from_lat_lng_deg(lat, lng)
    }
}

impl TryFrom<Record> for e::pizzeria::Pizzeria {
    type Error = e::geo::CoordRangeError;

    fn try_from(from: Record) -> Result<Self, Self::Error> {
        let Record { id, name, geoloc } = from;
        Ok(Self {
            id: id.map(Into::into),
            name,
            pos: geoloc.try_into()?,
        })
    }
}
