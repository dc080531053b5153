//! Work data model matching the OpenAlex API schema.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A scholarly work from OpenAlex.
///
/// Only the fields the search projection reads are modelled; everything else
/// in the upstream record is ignored on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Work {
    /// OpenAlex ID URL (e.g. `https://openalex.org/W2741809807`).
    #[serde(default)]
    pub id: Option<String>,

    /// DOI URL.
    #[serde(default)]
    pub doi: Option<String>,

    /// Work title.
    #[serde(default)]
    pub title: Option<String>,

    /// Display name (same as title in practice).
    #[serde(default)]
    pub display_name: Option<String>,

    /// Work type (e.g. "article", "book-chapter").
    #[serde(default, rename = "type")]
    pub work_type: Option<String>,

    /// Publication date in ISO format (YYYY-MM-DD).
    #[serde(default)]
    pub publication_date: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub publication_year: Option<i32>,

    /// Date the record was created in OpenAlex.
    #[serde(default)]
    pub created_date: Option<String>,

    /// Number of works citing this one.
    #[serde(default)]
    pub cited_by_count: Option<i64>,

    /// Authorships in byline order.
    #[serde(default)]
    pub authorships: Vec<Authorship>,

    /// Abstract as an inverted index of word -> positions.
    #[serde(default)]
    pub abstract_inverted_index: Option<HashMap<String, Vec<usize>>>,
}

impl Work {
    /// Rebuild the plain-text abstract from the inverted index.
    ///
    /// Words are placed at their positions and joined by single spaces.
    #[must_use]
    pub fn abstract_text(&self) -> Option<String> {
        let index = self.abstract_inverted_index.as_ref()?;

        let mut positioned: Vec<(usize, &str)> = index
            .iter()
            .flat_map(|(word, positions)| positions.iter().map(move |&p| (p, word.as_str())))
            .collect();

        if positioned.is_empty() {
            return None;
        }

        positioned.sort_unstable_by_key(|&(p, _)| p);

        Some(positioned.into_iter().map(|(_, word)| word).collect::<Vec<_>>().join(" "))
    }
}

/// One author's participation in a work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Authorship {
    /// Position in the byline ("first", "middle", "last").
    #[serde(default)]
    pub author_position: Option<String>,

    /// The author.
    #[serde(default)]
    pub author: Option<DehydratedAuthor>,
}

/// Minimal author record embedded in an authorship.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DehydratedAuthor {
    /// OpenAlex author ID URL.
    #[serde(default)]
    pub id: Option<String>,

    /// Author display name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// ORCID URL.
    #[serde(default)]
    pub orcid: Option<String>,
}

/// Metadata block of a list response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListMeta {
    /// Total number of matching works.
    #[serde(default)]
    pub count: Option<i64>,

    /// Current page.
    #[serde(default)]
    pub page: Option<i64>,

    /// Page size.
    #[serde(default)]
    pub per_page: Option<i64>,
}

/// Response of `GET /works`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorksResponse {
    /// Paging metadata.
    #[serde(default)]
    pub meta: ListMeta,

    /// Works in upstream order.
    #[serde(default)]
    pub results: Vec<Work>,
}
