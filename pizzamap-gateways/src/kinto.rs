use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use pizzamap_boundary::{Record, RecordList, SearchQuery, SearchResponse};
use pizzamap_core::gateways::{RecordStore, SearchGateway};
use pizzamap_entities::{
    geo::{CoordRangeError, MapBbox},
    pizzeria::Pizzeria,
};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Kinto responded with {0}")]
    Api(#[from] pizzamap_boundary::Error),
    #[error("Unexpected response with status {status}")]
    Status {
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] CoordRangeError),
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Additional parameters that are sent along with
/// every bounding box search.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub query: Option<String>,
    pub hits_per_page: Option<u64>,
}

/// Client for a single collection of a Kinto server
/// that has the search plugin enabled.
#[derive(Debug, Clone)]
pub struct KintoClient {
    http: reqwest::Client,
    server: String,
    bucket: String,
    collection: String,
    credentials: Option<Credentials>,
    search_options: SearchOptions,
}

impl KintoClient {
    pub fn new(
        server: impl Into<String>,
        bucket: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            server: server.into(),
            bucket: bucket.into(),
            collection: collection.into(),
            credentials: None,
            search_options: SearchOptions::default(),
        }
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn with_search_options(mut self, search_options: SearchOptions) -> Self {
        self.search_options = search_options;
        self
    }

    fn collection_url(&self) -> String {
        let Self {
            server,
            bucket,
            collection,
            ..
        } = self;
        let server = server.trim_end_matches('/');
        format!("{server}/buckets/{bucket}/collections/{collection}")
    }

    pub fn records_url(&self) -> String {
        format!("{}/records", self.collection_url())
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.collection_url())
    }

    pub fn search_query(&self, bbox: &MapBbox) -> SearchQuery {
        let SearchOptions {
            query,
            hits_per_page,
        } = &self.search_options;
        SearchQuery {
            query: query.clone(),
            hits_per_page: *hits_per_page,
            ..SearchQuery::from(bbox)
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        log::debug!("{method} {url}");
        let request = self.http.request(method, url);
        match &self.credentials {
            Some(Credentials { username, password }) => {
                request.basic_auth(username, Some(password))
            }
            None => request,
        }
    }

    /// Fetches the first page of records.
    pub async fn list_records(&self) -> Result<Vec<Record>> {
        let response = self
            .request(Method::GET, &self.records_url())
            .send()
            .await?;
        let RecordList { data } = into_json(response).await?;
        Ok(data)
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let response = self
            .request(Method::POST, &self.search_url())
            .json(query)
            .send()
            .await?;
        into_json(response).await
    }
}

async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    match response.json::<pizzamap_boundary::Error>().await {
        Ok(err) => Err(err.into()),
        Err(source) => {
            log::warn!("Kinto responded with status {status} and an unknown body");
            Err(Error::Status { status, source })
        }
    }
}

fn into_pizzerias(records: Vec<Record>) -> Result<Vec<Pizzeria>> {
    records
        .into_iter()
        .map(|r| Pizzeria::try_from(r).map_err(Error::from))
        .collect()
}

#[async_trait(?Send)]
impl SearchGateway for KintoClient {
    async fn search_extent(&self, bbox: &MapBbox) -> anyhow::Result<Vec<Pizzeria>> {
        let query = self.search_query(bbox);
        let SearchResponse { hits, .. } = self.search(&query).await?;
        Ok(into_pizzerias(hits)?)
    }
}

#[async_trait(?Send)]
impl RecordStore for KintoClient {
    async fn list_records(&self) -> anyhow::Result<Vec<Pizzeria>> {
        let records = KintoClient::list_records(self).await?;
        Ok(into_pizzerias(records)?)
    }
}
