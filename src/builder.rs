//! Section builder for assembling documents in outline order.
//!
//! # Example
//!
//! ```
//! use reportgen::DocumentBuilder;
//!
//! fn main() -> reportgen::Result<()> {
//!     let mut builder = DocumentBuilder::new();
//!     builder.add_title("Release Notes");
//!     builder
//!         .add_heading("1. Highlights", 1)?
//!         .add_bullet_list(["Faster startup", "Smaller binaries"]);
//!
//!     let doc = builder.build();
//!     assert_eq!(doc.len(), 4);
//!     Ok(())
//! }
//! ```

use crate::error::Result;
use crate::model::{Alignment, Block, Document, Metadata};

/// Ordered, append-only builder for a [`Document`].
///
/// Every operation appends to the end of the block sequence. Operations that
/// can fail validate before touching the sequence, so a rejected call leaves
/// the document unchanged.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    metadata: Metadata,
    blocks: Vec<Block>,
}

impl DocumentBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach document metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Append a centered level-0 title block.
    pub fn add_title(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::title(text))
    }

    /// Append a heading; `level` must be between 1 and
    /// [`MAX_HEADING_LEVEL`](crate::model::MAX_HEADING_LEVEL).
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) -> Result<&mut Self> {
        let block = Block::heading(text, level)?;
        Ok(self.push(block))
    }

    /// Append a left-aligned body paragraph.
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::paragraph(text))
    }

    /// Append a centered body paragraph.
    pub fn add_centered_paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::paragraph(text).with_alignment(Alignment::Center))
    }

    /// Append one list item per entry, preserving order.
    ///
    /// An empty iterator appends nothing.
    pub fn add_bullet_list<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocks
            .extend(items.into_iter().map(|item| Block::list_item(item)));
        self
    }

    /// Append an empty paragraph carrying only trailing space.
    pub fn add_spacer(&mut self, points: f32) -> Result<&mut Self> {
        let block = Block::spacer(points)?;
        Ok(self.push(block))
    }

    /// Append a title page: the title, one paragraph per subtitle line and a
    /// trailing spacer.
    pub fn add_title_page<I, S>(
        &mut self,
        title: impl Into<String>,
        subtitles: I,
        spacing: f32,
    ) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // Validate the spacer first so a bad value leaves no partial title page.
        let spacer = Block::spacer(spacing)?;
        self.add_title(title);
        for line in subtitles {
            self.add_paragraph(line);
        }
        Ok(self.push(spacer))
    }

    /// Number of blocks appended so far.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Finish building.
    pub fn build(self) -> Document {
        log::debug!("Built document with {} blocks", self.blocks.len());
        Document::from_parts(self.metadata, self.blocks)
    }

    fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }
}
