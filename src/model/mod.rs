//! Document model types for report content.
//!
//! This module defines the intermediate representation that sits between
//! the section builder and the document sinks. The model is
//! format-agnostic: nothing here knows how a sink persists bytes.

mod block;
mod document;

pub use block::{Alignment, Block, BlockKind, BlockStyle, MAX_HEADING_LEVEL};
pub use document::{Document, DocumentStats, Metadata, Outline, OutlineItem, Section};

pub(crate) use document::RawDocument;
