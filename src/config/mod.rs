use anyhow::{anyhow, Result};
use pizzamap_core::{
    usecases::ResponseOrdering,
    viewport::{ViewportSize, MAX_ZOOM},
};
use pizzamap_entities::geo::MapPoint;
use pizzamap_gateways::kinto::{Credentials, SearchOptions};
use std::{fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "pizzamap.toml";

pub struct Config {
    pub kinto: Kinto,
    pub map: Map,
    pub search: Search,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        Self::try_from(raw_config)
    }
}

pub struct Kinto {
    pub server: String,
    pub bucket: String,
    pub collection: String,
    pub credentials: Option<Credentials>,
}

pub struct Map {
    pub center: MapPoint,
    pub zoom: u8,
    pub size: ViewportSize,
}

pub struct Search {
    pub ordering: ResponseOrdering,
    pub options: SearchOptions,
}

pub fn check_server_url(server: &str) -> Result<()> {
    if !(server.starts_with("http://") || server.starts_with("https://")) {
        return Err(anyhow!("Invalid Kinto server URL '{server}'"));
    }
    Ok(())
}

pub fn check_collection(bucket: &str, collection: &str) -> Result<()> {
    if bucket.is_empty() || collection.is_empty() {
        return Err(anyhow!("Missing Kinto bucket or collection"));
    }
    Ok(())
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { kinto, map, search } = from;

        let raw::Kinto {
            server,
            bucket,
            collection,
            auth,
        } = kinto.unwrap_or_default();

        check_server_url(&server)?;
        check_collection(&bucket, &collection)?;
        let credentials = auth
            .map(|auth| {
                auth.split_once(':')
                    .map(|(username, password)| Credentials {
                        username: username.to_owned(),
                        password: password.to_owned(),
                    })
                    .ok_or_else(|| anyhow!("Kinto auth must be given as 'user:password'"))
            })
            .transpose()?;
        let kinto = Kinto {
            server,
            bucket,
            collection,
            credentials,
        };

        let raw::Map {
            center_lat,
            center_lng,
            zoom,
            width,
            height,
        } = map.unwrap_or_default();

        let center = MapPoint::try_from_lat_lng_deg(center_lat, center_lng)
            .map_err(|err| anyhow!("Invalid map center: {err}"))?;
        if zoom > MAX_ZOOM {
            return Err(anyhow!("Zoom level {zoom} exceeds the maximum of {MAX_ZOOM}"));
        }
        if width == 0 || height == 0 {
            return Err(anyhow!("The map size must not be empty"));
        }
        let map = Map {
            center,
            zoom,
            size: ViewportSize { width, height },
        };

        let raw::Search {
            ordering,
            query,
            hits_per_page,
        } = search.unwrap_or_default();

        let ordering = ordering
            .map(|ordering| {
                ordering
                    .parse::<ResponseOrdering>()
                    .map_err(|_| anyhow!("Unknown response ordering '{ordering}'"))
            })
            .transpose()?
            .unwrap_or_default();
        let search = Search {
            ordering,
            options: SearchOptions {
                query,
                hits_per_page,
            },
        };

        Ok(Self { kinto, map, search })
    }
}
