//! Work search tool.

use super::{McpTool, ToolContext, input_schema_for};
use crate::client::{WorksQuery, filters};
use crate::error::ToolResult;
use crate::formatters::{SearchOutput, condense_work};
use crate::models::SearchInput;

/// Search OpenAlex works and return condensed records.
pub struct SearchTool;

#[async_trait::async_trait]
impl McpTool for SearchTool {
    fn name(&self) -> &'static str {
        "openalex-search"
    }

    fn description(&self) -> &'static str {
        "Search OpenAlex for works"
    }

    fn input_schema(&self) -> serde_json::Value {
        input_schema_for::<SearchInput>()
    }

    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value> {
        let params: SearchInput = serde_json::from_value(input)?;
        let query = build_works_query(&params);

        tracing::debug!(search = query.search_term(), filters = query.filters().len(), "Searching works");

        let response = ctx.client.search_works(&query).await?;

        let output = SearchOutput { works: response.results.iter().map(condense_work).collect() };

        Ok(serde_json::to_value(output)?)
    }
}

/// Translate search input into upstream query parameters.
///
/// Unset, empty, `false` and non-positive fields add no constraint; every other
/// field adds exactly one.
#[must_use]
pub fn build_works_query(input: &SearchInput) -> WorksQuery {
    let query = WorksQuery::search(input.query.clone());

    let Some(filter) = &input.filter else {
        return query;
    };

    let mut query = query
        .filter_any(filters::AUTHOR_ID, &filter.author_ids)
        .filter_any(filters::AUTHOR_ORCID, &filter.author_orcid_ids);

    if let Some(min) = filter.min_cited_by_count.filter(|n| *n > 0) {
        query = query.filter(filters::CITED_BY_COUNT, format!(">={min}"));
    }
    if filter.is_open_access == Some(true) {
        query = query.filter(filters::IS_OA, "true");
    }

    let text_filters = [
        (filters::FROM_PUBLICATION_DATE, &filter.from_publication_date),
        (filters::TO_PUBLICATION_DATE, &filter.to_publication_date),
        (filters::CITED_BY, &filter.cited_by),
        (filters::CITES, &filter.cites),
    ];
    for (key, value) in text_filters {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            query = query.filter(key, value);
        }
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchFilter;

    fn with_filter(filter: SearchFilter) -> SearchInput {
        SearchInput { query: "reefs".to_string(), filter: Some(filter) }
    }

    #[test]
    fn test_no_filter_adds_no_constraints() {
        let query = build_works_query(&SearchInput { query: "reefs".to_string(), filter: None });
        assert!(query.filters().is_empty());
        assert_eq!(query.filter_param(), None);
    }

    #[test]
    fn test_empty_filter_adds_no_constraints() {
        let query = build_works_query(&with_filter(SearchFilter::default()));
        assert_eq!(query.filter_param(), None);
    }

    #[test]
    fn test_min_cited_by_count() {
        let query = build_works_query(&with_filter(SearchFilter {
            min_cited_by_count: Some(10),
            ..Default::default()
        }));
        assert_eq!(query.filter_param().as_deref(), Some("cited_by_count:>=10"));
    }

    #[test]
    fn test_open_access() {
        let query = build_works_query(&with_filter(SearchFilter {
            is_open_access: Some(true),
            ..Default::default()
        }));
        assert_eq!(query.filter_param().as_deref(), Some("open_access.is_oa:true"));
    }

    #[test]
    fn test_all_filters_in_fixed_order() {
        let query = build_works_query(&with_filter(SearchFilter {
            author_ids: vec!["A1".to_string(), "A2".to_string()],
            author_orcid_ids: vec!["0000-0002-1825-0097".to_string()],
            min_cited_by_count: Some(5),
            is_open_access: Some(true),
            from_publication_date: Some("2020-01-01".to_string()),
            to_publication_date: Some("2021-12-31".to_string()),
            cited_by: Some("W10".to_string()),
            cites: Some("W20".to_string()),
        }));

        assert_eq!(
            query.filter_param().as_deref(),
            Some(
                "authorships.author.id:A1|A2,\
                 authorships.author.orcid:0000-0002-1825-0097,\
                 cited_by_count:>=5,\
                 open_access.is_oa:true,\
                 from_publication_date:2020-01-01,\
                 to_publication_date:2021-12-31,\
                 cited_by:W10,\
                 cites:W20"
            )
        );
        assert_eq!(query.search_term(), "reefs");
    }

    #[test]
    fn test_dates_forwarded_verbatim() {
        let query = build_works_query(&with_filter(SearchFilter {
            from_publication_date: Some("not-a-date".to_string()),
            ..Default::default()
        }));
        assert_eq!(query.filter_param().as_deref(), Some("from_publication_date:not-a-date"));
    }

    #[test]
    fn test_closed_access_flag_adds_no_constraint() {
        let query = build_works_query(&with_filter(SearchFilter {
            is_open_access: Some(false),
            ..Default::default()
        }));
        assert_eq!(query.filter_param(), None);
    }

    #[test]
    fn test_non_positive_citation_floor_adds_no_constraint() {
        for min in [0, -1, i64::MIN] {
            let query = build_works_query(&with_filter(SearchFilter {
                min_cited_by_count: Some(min),
                ..Default::default()
            }));
            assert_eq!(query.filter_param(), None, "min_cited_by_count = {min}");
        }
    }

    #[test]
    fn test_empty_strings_add_no_constraints() {
        let query = build_works_query(&with_filter(SearchFilter {
            from_publication_date: Some(String::new()),
            to_publication_date: Some(String::new()),
            cited_by: Some(String::new()),
            cites: Some(String::new()),
            ..Default::default()
        }));
        assert_eq!(query.filter_param(), None);
    }

    #[test]
    fn test_zero_valued_filter_from_json_sends_nothing() {
        let input: SearchInput = serde_json::from_value(serde_json::json!({
            "query": "reefs",
            "filter": {
                "is_open_access": false,
                "min_cited_by_count": 0,
                "from_publication_date": "",
                "cites": ""
            }
        }))
        .unwrap();

        let query = build_works_query(&input);
        assert_eq!(query.filter_param(), None);
        assert_eq!(query.search_term(), "reefs");
    }
}
