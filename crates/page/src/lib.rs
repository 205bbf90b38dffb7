//! Rendered-page model for coursekit
//!
//! This crate provides:
//! - NodeKind and PageNode: the text-bearing units of a rendered page
//! - Page: an owned snapshot of one page in document order
//! - HTML ingestion via `Page::from_html`
//!
//! A `Page` is the collaborator the search indexer walks. It is built once
//! per page and mutated only by indexer id assignment.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod html;
pub mod node;
pub mod page;

pub use node::{NodeKind, PageNode};
pub use page::Page;
