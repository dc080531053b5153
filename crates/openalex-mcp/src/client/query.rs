//! Query builder for the `/works` list endpoint.
//!
//! OpenAlex takes all constraints in one `filter` parameter as
//! comma-separated `key:value` pairs, which the API ANDs together.
//! Alternatives within one value are separated by `|`.

/// Filter keys understood by the works endpoint.
pub mod filters {
    /// Author OpenAlex IDs.
    pub const AUTHOR_ID: &str = "authorships.author.id";

    /// Author ORCIDs.
    pub const AUTHOR_ORCID: &str = "authorships.author.orcid";

    /// Citation count (supports comparison prefixes).
    pub const CITED_BY_COUNT: &str = "cited_by_count";

    /// Open access flag.
    pub const IS_OA: &str = "open_access.is_oa";

    /// Earliest publication date (inclusive).
    pub const FROM_PUBLICATION_DATE: &str = "from_publication_date";

    /// Latest publication date (inclusive).
    pub const TO_PUBLICATION_DATE: &str = "to_publication_date";

    /// Works cited by the given work.
    pub const CITED_BY: &str = "cited_by";

    /// Works citing the given work.
    pub const CITES: &str = "cites";
}

/// Parameters for one `GET /works` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorksQuery {
    search: String,
    filters: Vec<(String, String)>,
}

impl WorksQuery {
    /// Start a query with a free-text search term. Empty means no `search` parameter.
    #[must_use]
    pub fn search(query: impl Into<String>) -> Self {
        Self { search: query.into(), filters: Vec::new() }
    }

    /// Add a `key:value` constraint.
    #[must_use]
    pub fn filter(mut self, key: &str, value: impl Into<String>) -> Self {
        self.filters.push((key.to_string(), value.into()));
        self
    }

    /// Add a membership constraint: any of `values` matches.
    ///
    /// An empty list adds nothing.
    #[must_use]
    pub fn filter_any(self, key: &str, values: &[String]) -> Self {
        if values.is_empty() {
            return self;
        }
        self.filter(key, values.join("|"))
    }

    /// Free-text search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Constraints in insertion order.
    #[must_use]
    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    /// The rendered `filter` parameter, or `None` without constraints.
    #[must_use]
    pub fn filter_param(&self) -> Option<String> {
        if self.filters.is_empty() {
            return None;
        }

        Some(
            self.filters
                .iter()
                .map(|(k, v)| format!("{k}:{v}"))
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    /// Query-string pairs for the request (without `mailto`).
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(2);

        if !self.search.is_empty() {
            params.push(("search".to_string(), self.search.clone()));
        }

        if let Some(filter) = self.filter_param() {
            params.push(("filter".to_string(), filter));
        }

        params
    }
}
