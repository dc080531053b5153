//! Data models for OpenAlex API entities and tool inputs.
//!
//! Upstream models use `#[serde(default)]` for optional fields and keep
//! OpenAlex's snake_case names as-is.

mod inputs;
mod work;

pub use inputs::{GetWorkInput, SearchFilter, SearchInput};
pub use work::{Authorship, DehydratedAuthor, ListMeta, Work, WorksResponse};
