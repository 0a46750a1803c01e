use serde::{Deserialize, Deserializer, Serialize};

use crate::form::FormData;

pub mod fields {
    pub const QUERY: &str = "query";
    pub const PAGE: &str = "page";
    pub const LIMIT: &str = "limit";
}

/// What a single submit asks the backend for. Values are kept exactly as
/// typed; the backend is the one that parses page and limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameters {
    pub query: String,
    pub page: String,
    pub limit: String,
}

impl QueryParameters {
    pub fn new(
        query: impl Into<String>,
        page: impl Into<String>,
        limit: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            page: page.into(),
            limit: limit.into(),
        }
    }

    pub fn from_form(form: &FormData) -> Self {
        let field = |name: &str| form.get(name).unwrap_or_default().to_string();
        Self {
            query: field(fields::QUERY),
            page: field(fields::PAGE),
            limit: field(fields::LIMIT),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total_quantity: u64,
    pub page_quantity: u64,
    // The backend encodes "no results" as null.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub search_results: Vec<SearchResult>,
}

/// A contiguous run of source lines around a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub from_line: u64,
    pub to_line: u64,
    pub lines_text: Vec<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_takes_values_verbatim() {
        let form = FormData::new()
            .with_field("query", " to be ")
            .with_field("page", "two")
            .with_field("limit", "-5");

        let params = QueryParameters::from_form(&form);
        assert_eq!(params, QueryParameters::new(" to be ", "two", "-5"));
    }

    #[test]
    fn test_from_form_missing_fields_are_empty() {
        let form = FormData::new().with_field("query", "romeo");
        let params = QueryParameters::from_form(&form);
        assert_eq!(params, QueryParameters::new("romeo", "", ""));
    }

    #[test]
    fn test_decode_full_response() {
        let body = r#"{
            "total_quantity": 2,
            "page_quantity": 2,
            "search_results": [
                {"from_line": 5, "to_line": 7, "lines_text": ["x"]}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_quantity, 2);
        assert_eq!(response.page_quantity, 2);
        assert_eq!(
            response.search_results,
            vec![SearchResult {
                from_line: 5,
                to_line: 7,
                lines_text: vec!["x".to_string()],
            }]
        );
    }

    #[test]
    fn test_decode_null_and_missing_results() {
        let null: SearchResponse = serde_json::from_str(
            r#"{"total_quantity":0,"page_quantity":0,"search_results":null}"#,
        )
        .unwrap();
        assert!(null.search_results.is_empty());

        let missing: SearchResponse =
            serde_json::from_str(r#"{"total_quantity":0,"page_quantity":0}"#).unwrap();
        assert!(missing.search_results.is_empty());
    }

    #[test]
    fn test_decode_rejects_missing_counts() {
        let res = serde_json::from_str::<SearchResponse>(r#"{"search_results":[]}"#);
        assert!(res.is_err());
    }
}
