use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GeoLoc {
    pub lat: f64,
    pub lng: f64,
}

/// A pizzeria as stored in the Kinto collection.
///
/// Unknown fields (`last_modified`, address data, ...) are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "_geoloc")]
    pub geoloc: GeoLoc,
}

/// Response of the Kinto "list records" endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RecordList {
    pub data: Vec<Record>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// `"lat1,lng1,lat2,lng2"`, north-west corner first.
    pub inside_bounding_box: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hits_per_page: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub hits: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nb_hits: Option<u64>,
}

/// Error body returned by Kinto for any non-2xx response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, thiserror::Error)]
#[error("{code} {error} (errno {errno}){}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct Error {
    pub code: u16,
    pub errno: u32,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_search_query() {
        let query = SearchQuery {
            inside_bounding_box: "42,12,41,13".into(),
            query: None,
            hits_per_page: None,
        };
        assert_eq!(
            serde_json::to_string(&query).unwrap(),
            r#"{"insideBoundingBox":"42,12,41,13"}"#
        );
        let query = SearchQuery {
            query: Some("margherita".into()),
            hits_per_page: Some(20),
            ..query
        };
        assert_eq!(
            serde_json::to_string(&query).unwrap(),
            r#"{"insideBoundingBox":"42,12,41,13","query":"margherita","hitsPerPage":20}"#
        );
    }

    #[test]
    fn deserialize_search_response() {
        let json = r#"{
          "hits": [
            {"name": "A", "_geoloc": {"lat": 41.9, "lng": 12.4}, "objectID": "x"},
            {"_geoloc": {"lat": 41.8, "lng": 12.5}}
          ],
          "nbHits": 2,
          "page": 0
        }"#;
        let res: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.nb_hits, Some(2));
        assert_eq!(res.hits.len(), 2);
        assert_eq!(res.hits[0].name.as_deref(), Some("A"));
        assert_eq!(res.hits[1].name, None);
        assert_eq!(res.hits[1].geoloc, GeoLoc { lat: 41.8, lng: 12.5 });
    }

    #[test]
    fn deserialize_record_list() {
        let json = r#"{"data": [
          {"id": "b8d3", "last_modified": 1500000000000, "name": null, "_geoloc": {"lat": 41.9, "lng": 12.4}}
        ]}"#;
        let list: RecordList = serde_json::from_str(json).unwrap();
        assert_eq!(list.data[0].id.as_deref(), Some("b8d3"));
        assert_eq!(list.data[0].name, None);
    }

    #[test]
    fn record_without_geoloc_is_rejected() {
        assert!(serde_json::from_str::<Record>(r#"{"name":"A"}"#).is_err());
    }

    #[test]
    fn display_api_error() {
        let json = r#"{"code": 400, "errno": 107, "error": "Invalid parameters", "message": "bad bbox"}"#;
        let err: Error = serde_json::from_str(json).unwrap();
        assert_eq!(
            err.to_string(),
            "400 Invalid parameters (errno 107): bad bbox"
        );
    }
}
