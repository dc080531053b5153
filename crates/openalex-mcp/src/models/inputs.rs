//! Input models for MCP tool parameters.
//!
//! JSON schemas for `tools/list` are derived from these types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input for `openalex-search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchInput {
    /// Search text.
    #[schemars(description = "Free-text search over titles, abstracts and fulltext")]
    pub query: String,

    /// Optional filter block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Optional constraints, combined with AND")]
    pub filter: Option<SearchFilter>,
}

/// Optional search constraints. Every absent field applies no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchFilter {
    /// Author OpenAlex IDs, any of which may match.
    #[serde(default, alias = "authorships.author.id", skip_serializing_if = "Vec::is_empty")]
    #[schemars(description = "list of OpenAlex author IDs")]
    pub author_ids: Vec<String>,

    /// Author ORCIDs, any of which may match.
    #[serde(default, alias = "authorships.author.orcid", skip_serializing_if = "Vec::is_empty")]
    #[schemars(description = "list of ORCID IDs")]
    pub author_orcid_ids: Vec<String>,

    /// Citation floor; zero or negative applies no constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "minimum number of citations of this work")]
    pub min_cited_by_count: Option<i64>,

    /// Only open-access works when `true`; `false` applies no constraint.
    #[serde(default, alias = "open_access.is_oa", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "whether the work is open access")]
    pub is_open_access: Option<bool>,

    /// Earliest publication date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "restrict to publications after this date (YYYY-MM-DD)")]
    pub from_publication_date: Option<String>,

    /// Latest publication date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "restrict to publications before this date (YYYY-MM-DD)")]
    pub to_publication_date: Option<String>,

    /// Work whose references are returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "restrict to works cited by this work by OpenAlex ID")]
    pub cited_by: Option<String>,

    /// Work whose citers are returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "restrict to works that cite this work by OpenAlex ID")]
    pub cites: Option<String>,
}

/// Input for `openalex-get-work`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetWorkInput {
    /// Work identifier, forwarded as given.
    #[schemars(
        description = "OpenAlex work ID (W2741809807), OpenAlex URL, or external ID such as doi:10.7717/peerj.4375"
    )]
    pub work_id: String,
}
