use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("pizzamap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub kinto: Option<Kinto>,
    pub map: Option<Map>,
    pub search: Option<Search>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Kinto {
    pub server: String,
    pub bucket: String,
    pub collection: String,
    pub auth: Option<String>,
}

impl Default for Kinto {
    fn default() -> Self {
        Config::default().kinto.expect("Kinto configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
    pub width: u32,
    pub height: u32,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Search {
    /// Parsed into [`pizzamap_core::usecases::ResponseOrdering`].
    pub ordering: Option<String>,
    pub query: Option<String>,
    pub hits_per_page: Option<u64>,
}

impl Default for Search {
    fn default() -> Self {
        Config::default().search.expect("Search configuration")
    }
}
