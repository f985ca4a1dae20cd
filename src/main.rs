use std::{cell::RefCell, io, rc::Rc};

use anyhow::Result;
use clap::Parser;
use tokio::{io::BufReader, runtime, task::LocalSet};

use pizzamap_gateways::kinto::KintoClient;

mod adapters;
mod app;
mod cli;
mod config;

use self::{
    adapters::terminal::TerminalListing,
    cli::{Args, Command},
    config::Config,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    args.apply_overrides(&mut cfg)?;

    let rt = runtime::Builder::new_current_thread().enable_all().build()?;
    LocalSet::new().block_on(&rt, run(args.command.unwrap_or(Command::Run), cfg))
}

fn kinto_client(cfg: &Config) -> KintoClient {
    let config::Kinto {
        server,
        bucket,
        collection,
        credentials,
    } = &cfg.kinto;
    log::info!("Connect to {server} ({bucket}/{collection})");
    let client = KintoClient::new(server.as_str(), bucket.as_str(), collection.as_str())
        .with_search_options(cfg.search.options.clone());
    match credentials {
        Some(credentials) => client.with_credentials(credentials.clone()),
        None => client,
    }
}

async fn run(cmd: Command, cfg: Config) -> Result<()> {
    let client = kinto_client(&cfg);
    match cmd {
        Command::Run => {
            let listing = Rc::new(RefCell::new(TerminalListing::stdout()));
            let input = BufReader::new(tokio::io::stdin());
            let count =
                app::run_map(&cfg.map, cfg.search.ordering, Rc::new(client), listing, input)
                    .await?;
            log::info!("Closed map with {count} markers");
        }
        Command::Search { bbox } => {
            let mut listing = TerminalListing::stdout();
            app::search_once(&client, &mut listing, &bbox).await?;
        }
        Command::Markers => {
            app::print_markers(&client, io::stdout()).await?;
        }
    }
    Ok(())
}
