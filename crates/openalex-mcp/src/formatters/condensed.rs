//! Condensed work projection for token-efficient search results.
//!
//! Every field is copied only if OpenAlex set it; absent fields are left out
//! of the serialized output instead of being filled with empty values.

use serde::{Deserialize, Serialize};

use crate::models::{DehydratedAuthor, Work};

/// Reduced view of a work returned by `openalex-search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondensedWork {
    /// Abstract rebuilt from the inverted index.
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    /// Authors in byline order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authorships: Vec<CondensedAuthor>,

    /// Number of citing works.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cited_by_count: Option<i64>,

    /// Date the record was added to OpenAlex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,

    /// DOI as a URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// OpenAlex ID URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Publication date (YYYY-MM-DD).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,

    /// Publication year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,

    /// Work title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Work type (article, book-chapter, ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub work_type: Option<String>,
}

/// Reduced view of an author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CondensedAuthor {
    /// OpenAlex author ID URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Author name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// ORCID URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
}

/// Result payload of `openalex-search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutput {
    /// Condensed works in upstream order.
    pub works: Vec<CondensedWork>,
}

/// Project a work onto its condensed form. Authorship order is kept.
#[must_use]
pub fn condense_work(work: &Work) -> CondensedWork {
    CondensedWork {
        abstract_text: work.abstract_text(),
        authorships: work
            .authorships
            .iter()
            .map(|a| a.author.as_ref().map(condense_author).unwrap_or_default())
            .collect(),
        cited_by_count: work.cited_by_count,
        created_date: work.created_date.clone(),
        doi: work.doi.clone(),
        id: work.id.clone(),
        publication_date: work.publication_date.clone(),
        publication_year: work.publication_year,
        title: work.title.clone(),
        work_type: work.work_type.clone(),
    }
}

/// Project an author onto its condensed form.
#[must_use]
pub fn condense_author(author: &DehydratedAuthor) -> CondensedAuthor {
    CondensedAuthor {
        id: author.id.clone(),
        display_name: author.display_name.clone(),
        orcid: author.orcid.clone(),
    }
}
