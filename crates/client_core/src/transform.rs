//! Pure reshaping of a raw search response into the view model.

use std::collections::HashMap;

use shared::{
    domain::{BriefingItem, ViewModel},
    protocol::{NewsItem, RawResponse},
};
use thiserror::Error;

const UNTITLED: &str = "Untitled";

#[derive(Debug, Error)]
pub enum TransformError {
    /// The payload deserialized but carried an empty `aggregations`
    /// sequence, which the sentiment view cannot work without.
    #[error("search response carried no aggregation buckets")]
    MissingAggregations,
    #[error("failed to re-encode the search response for the raw echo: {0}")]
    RawEcho(#[from] serde_json::Error),
}

/// Derive the view model from a raw search response.
///
/// Borrows its input and builds everything fresh, so calling it twice
/// on the same payload yields structurally equal view models and the
/// caller's copy is never mutated.
pub fn transform(raw: &RawResponse) -> Result<ViewModel, TransformError> {
    let first_bucket = raw
        .aggregations
        .first()
        .ok_or(TransformError::MissingAggregations)?;

    // The query-inspection view shows exactly what came over the wire,
    // minus the taxonomy labels (those render as categories instead).
    let mut raw_response = serde_json::to_value(raw)?;
    if let Some(object) = raw_response.as_object_mut() {
        object.remove("taxonomy");
    }

    let mut sentiment = HashMap::new();
    for entry in &first_bucket.results {
        sentiment.insert(entry.key.clone(), entry.matching_results);
    }

    let results = dedup_by_display_title(&raw.results);

    let briefing_items = results
        .iter()
        .map(|item| BriefingItem {
            title: display_title(item),
            text: item.text.clone(),
        })
        .collect();

    let categories = raw.taxonomy.clone().unwrap_or_default();

    Ok(ViewModel {
        results,
        categories,
        briefing_items,
        sentiment,
        raw_response,
    })
}

/// Title shown for an item: the enriched title when present and
/// non-empty, else the plain title, else `"Untitled"`.
pub fn display_title(item: &NewsItem) -> String {
    if let Some(text) = item.enriched_title.as_ref().and_then(|t| t.text.as_deref()) {
        if !text.is_empty() {
            return text.to_string();
        }
    }
    match item.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => UNTITLED.to_string(),
    }
}

/// Collapse duplicate display titles. The first occurrence of a title
/// keeps its position in the sequence; a later duplicate's fields win.
fn dedup_by_display_title(items: &[NewsItem]) -> Vec<NewsItem> {
    let mut order = Vec::new();
    let mut by_title: HashMap<String, NewsItem> = HashMap::new();
    for item in items {
        let title = display_title(item);
        if !by_title.contains_key(&title) {
            order.push(title.clone());
        }
        by_title.insert(title, item.clone());
    }
    order
        .into_iter()
        .filter_map(|title| by_title.remove(&title))
        .collect()
}
