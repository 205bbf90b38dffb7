//! In-page full-text search for coursekit
//!
//! This crate provides:
//! - SearchIndex built once per page over qualifying text nodes
//! - IndexEntry and SearchHit result types
//! - Query tokenizer and substring scorer
//! - Render-ready result views for a presentation layer
//!
//! # Usage
//!
//! ```
//! use coursekit_page::{NodeKind, Page};
//! use coursekit_search::SearchIndex;
//!
//! let mut page = Page::new()
//!     .with_title("Python Essentials")
//!     .with_node(NodeKind::Heading2, "Printing and output");
//!
//! let index = SearchIndex::build(&mut page);
//! let hits = index.search("printing");
//! assert_eq!(hits.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod present;
pub mod scorer;
pub mod tokenizer;
pub mod types;

pub use index::{SearchIndex, DEFAULT_SECTION_LABEL, MIN_QUERY_LEN, MIN_TEXT_LEN};
pub use present::{icon, result_views, top_highlight_ids, ResultView, HIGHLIGHT_LIMIT, PREVIEW_LEN, RESULT_LIMIT};
pub use scorer::{FULL_QUERY_BONUS, HEADING_MULTIPLIER, TOKEN_BONUS};
pub use tokenizer::tokenize;
pub use types::{IndexEntry, SearchHit};
