use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::protocol::NewsItem;

/// The four tabbed views a search session can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    News,
    Briefing,
    Sentiment,
    Query,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefingItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Normalized, UI-ready shape derived once per successful fetch.
///
/// Instances are produced fresh by the response transformer and never
/// mutated afterwards; a later fetch replaces the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    /// Results deduplicated by display title. The first occurrence of a
    /// title keeps its position; a later duplicate's fields win.
    pub results: Vec<NewsItem>,
    /// Backend taxonomy labels, or empty when the payload carried none.
    pub categories: Vec<String>,
    /// One entry per deduplicated result, same order.
    pub briefing_items: Vec<BriefingItem>,
    /// Aggregation key -> matching_results, from the first bucket only.
    pub sentiment: HashMap<String, u64>,
    /// The payload as received, minus its `taxonomy` key. Shown verbatim
    /// in the query-inspection view.
    pub raw_response: serde_json::Value,
}
