//! Wire shapes of the discovery backend's search response.
//!
//! The backend attaches plenty of fields this client never interprets;
//! every record keeps them in a flattened passthrough map so the
//! query-inspection view can echo the payload verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Search response payload as received from `GET /api/search`.
///
/// `results` and `aggregations` are required; a payload without them is
/// rejected at deserialization. `aggregations` must additionally be
/// non-empty, which the response transformer validates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResponse {
    pub results: Vec<NewsItem>,
    pub aggregations: Vec<Aggregation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single ranked result. All display-relevant fields are optional;
/// the enriched title, when present, wins over the plain one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        rename = "enrichedTitle",
        skip_serializing_if = "Option::is_none"
    )]
    pub enriched_title: Option<EnrichedTitle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedTitle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Backend-computed grouping (e.g. by sentiment) with per-key match
/// counts. Only the first bucket of a response is consulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub results: Vec<AggregationEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationEntry {
    pub key: String,
    pub matching_results: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_response_keeps_unknown_fields_through_a_round_trip() {
        let payload = serde_json::json!({
            "matching_results": 1234,
            "results": [
                {
                    "title": "Oil prices",
                    "enrichedTitle": { "text": "Oil prices climb", "language": "en" },
                    "text": "body",
                    "score": 0.87
                }
            ],
            "aggregations": [
                { "type": "term", "results": [ { "key": "positive", "matching_results": 3 } ] }
            ],
            "taxonomy": ["energy"]
        });

        let raw: RawResponse = serde_json::from_value(payload.clone()).expect("parse");
        assert_eq!(raw.extra.get("matching_results"), Some(&serde_json::json!(1234)));
        assert_eq!(raw.results[0].extra.get("score"), Some(&serde_json::json!(0.87)));
        assert_eq!(raw.aggregations[0].extra.get("type"), Some(&serde_json::json!("term")));

        let round_tripped = serde_json::to_value(&raw).expect("serialize");
        assert_eq!(round_tripped, payload);
    }

    #[test]
    fn payload_without_required_fields_is_rejected() {
        let missing_aggregations = serde_json::json!({ "results": [] });
        assert!(serde_json::from_value::<RawResponse>(missing_aggregations).is_err());

        let missing_results = serde_json::json!({ "aggregations": [] });
        assert!(serde_json::from_value::<RawResponse>(missing_results).is_err());
    }
}
