use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pizzamap_core::usecases::ResponseOrdering;
use pizzamap_entities::geo::MapBbox;

use crate::config::{self, Config};

#[derive(Debug, Parser)]
#[command(author, version, about = "Find pizzerias on a map")]
pub struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the Kinto server
    #[arg(long, env = "KINTO_SERVER_URL", value_name = "URL")]
    pub server: Option<String>,

    #[arg(long)]
    pub bucket: Option<String>,

    #[arg(long)]
    pub collection: Option<String>,

    /// Which response wins if searches overlap
    /// (last-resolved or latest-request)
    #[arg(long)]
    pub ordering: Option<ResponseOrdering>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Place the markers and navigate the map with commands read from stdin
    Run,
    /// Search once inside of a bounding box
    Search {
        /// north-west and south-east corner: lat,lng,lat,lng
        #[arg(long, allow_hyphen_values = true)]
        bbox: MapBbox,
    },
    /// Print the position of every marker
    Markers,
}

impl Args {
    /// Overrides the configuration with the given options
    /// and validates the result.
    pub fn apply_overrides(&self, cfg: &mut Config) -> anyhow::Result<()> {
        if let Some(server) = &self.server {
            config::check_server_url(server)?;
            cfg.kinto.server.clone_from(server);
        }
        if let Some(bucket) = &self.bucket {
            cfg.kinto.bucket.clone_from(bucket);
        }
        if let Some(collection) = &self.collection {
            cfg.kinto.collection.clone_from(collection);
        }
        config::check_collection(&cfg.kinto.bucket, &cfg.kinto.collection)?;
        if let Some(ordering) = self.ordering {
            cfg.search.ordering = ordering;
        }
        Ok(())
    }
}
