//! Response shaping for tool output.

mod condensed;

pub use condensed::{CondensedAuthor, CondensedWork, SearchOutput, condense_author, condense_work};
