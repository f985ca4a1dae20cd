use pizzamap_entities::{geo::*, marker::Marker, pizzeria::Pizzeria};

pub trait InBBox {
    fn in_bbox(&self, bbox: &MapBbox) -> bool;
}

impl InBBox for Pizzeria {
    fn in_bbox(&self, bbox: &MapBbox) -> bool {
        bbox.contains_point(self.pos)
    }
}

impl InBBox for Marker {
    fn in_bbox(&self, bbox: &MapBbox) -> bool {
        bbox.contains_point(self.pos)
    }
}

#[cfg(test)]
mod tests {

    use pizzamap_entities::builders::*;

    use super::*;

    #[test]
    fn is_in_bounding_box() {
        let bb = MapBbox::new(
            MapPoint::from_lat_lng_deg(10.0, -10.0),
            MapPoint::from_lat_lng_deg(-10.0, 10.0),
        );
        let p = Pizzeria::build().name("foo").lat_lng(5.0, 5.0).finish();
        assert!(p.in_bbox(&bb));
        let p = Pizzeria::build().name("foo").lat_lng(10.1, 10.0).finish();
        assert!(!p.in_bbox(&bb));
    }

    #[test]
    fn filter_by_bounding_box() {
        let bb = MapBbox::new(
            MapPoint::from_lat_lng_deg(10.0, -10.0),
            MapPoint::from_lat_lng_deg(-10.0, 10.0),
        );
        let markers = vec![
            Marker::at(MapPoint::from_lat_lng_deg(5.0, 5.0)),
            Marker::at(MapPoint::from_lat_lng_deg(-5.0, 5.0)),
            Marker::at(MapPoint::from_lat_lng_deg(10.0, 10.1)),
        ];
        assert_eq!(markers.iter().filter(|&x| x.in_bbox(&bb)).count(), 2);
    }
}
