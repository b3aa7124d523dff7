//! Builds the illustrative request shown in the query-inspection view.

use serde::Serialize;

/// The query description rendered alongside the raw response: the
/// natural-language query as submitted plus the taxonomy filter the
/// backend's categories imply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryQuery {
    pub natural_language_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

pub fn build(natural_language_query: &str, categories: &[String]) -> DiscoveryQuery {
    DiscoveryQuery {
        natural_language_query: natural_language_query.to_string(),
        filter: taxonomy_filter(categories),
    }
}

/// Filter expression over the response's taxonomy labels, e.g.
/// `taxonomy.label:"energy","markets"`. Absent when there are none.
pub fn taxonomy_filter(categories: &[String]) -> Option<String> {
    if categories.is_empty() {
        return None;
    }
    let labels = categories
        .iter()
        .map(|category| format!("\"{category}\""))
        .collect::<Vec<_>>()
        .join(",");
    Some(format!("taxonomy.label:{labels}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_quotes_and_joins_labels() {
        let categories = vec!["energy".to_string(), "markets".to_string()];
        assert_eq!(
            taxonomy_filter(&categories).as_deref(),
            Some(r#"taxonomy.label:"energy","markets""#)
        );
    }

    #[test]
    fn filter_is_absent_without_categories() {
        assert_eq!(taxonomy_filter(&[]), None);
        let query = build("oil", &[]);
        assert_eq!(query.natural_language_query, "oil");
        assert!(query.filter.is_none());
    }

    #[test]
    fn serialized_query_omits_an_absent_filter() {
        let rendered = serde_json::to_value(build("oil", &[])).expect("serialize");
        assert_eq!(
            rendered,
            serde_json::json!({ "natural_language_query": "oil" })
        );
    }
}
