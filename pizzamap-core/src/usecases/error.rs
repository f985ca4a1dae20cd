use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not search the current extent: {0:#}")]
    Search(#[source] anyhow::Error),
    #[error("Could not load records: {0:#}")]
    LoadRecords(#[source] anyhow::Error),
}
