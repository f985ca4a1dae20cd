pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::pizzeria_builder::*;

pub mod pizzeria_builder {

    use super::*;
    use crate::{geo::*, pizzeria::*};

    #[derive(Debug)]
    pub struct PizzeriaBuild {
        pizzeria: Pizzeria,
    }

    impl PizzeriaBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.pizzeria.id = Some(id.into());
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.pizzeria.name = Some(name.into());
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.pizzeria.pos = pos;
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            self.pos(MapPoint::from_lat_lng_deg(lat, lng))
        }
        pub fn finish(self) -> Pizzeria {
            self.pizzeria
        }
    }

    impl Builder for Pizzeria {
        type Build = PizzeriaBuild;
        fn build() -> PizzeriaBuild {
            PizzeriaBuild {
                pizzeria: Pizzeria {
                    id: None,
                    name: None,
                    pos: MapPoint::default(),
                },
            }
        }
    }
}
