//! Emission walk: translate a document into sink calls.
//!
//! The walk visits blocks front to back exactly once. Each block becomes one
//! append call, optionally followed by a spacing directive for that same
//! block. After the last block the sink is finalized exactly once. The first
//! error aborts the walk and is returned unchanged.

use crate::error::Result;
use crate::model::{Block, BlockKind, Document};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::DocumentSink;

/// Counts of the calls issued during a successful emission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionStats {
    /// Title blocks emitted
    pub title_count: u32,
    /// Heading blocks emitted
    pub heading_count: u32,
    /// Body paragraphs emitted (spacers included)
    pub body_count: u32,
    /// Bullet items emitted
    pub bullet_count: u32,
    /// Spacing directives issued
    pub spacing_count: u32,
}

impl EmissionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of block append calls.
    pub fn block_count(&self) -> u32 {
        self.title_count + self.heading_count + self.body_count + self.bullet_count
    }
}

/// Emit `doc` into `sink` and finalize it at `output`.
pub fn emit<S: DocumentSink + ?Sized>(
    doc: Document,
    sink: &mut S,
    output: &Path,
) -> Result<EmissionStats> {
    Emitter::new().emit(doc, sink, output)
}

/// Drives a [`DocumentSink`] through a document.
#[derive(Debug, Default)]
pub struct Emitter {
    stats: EmissionStats,
}

impl Emitter {
    /// Create a new emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the document, then finalize the sink.
    ///
    /// The document is consumed; it cannot be emitted twice.
    pub fn emit<S: DocumentSink + ?Sized>(
        mut self,
        doc: Document,
        sink: &mut S,
        output: &Path,
    ) -> Result<EmissionStats> {
        let blocks = doc.into_blocks();
        log::debug!("Emitting {} blocks", blocks.len());

        for (index, block) in blocks.iter().enumerate() {
            self.emit_block(sink, block).map_err(|e| {
                log::debug!("Sink rejected block {}: {}", index, e);
                e
            })?;
        }

        sink.finalize(output)?;
        log::info!(
            "Emitted {} blocks to {}",
            self.stats.block_count(),
            output.display()
        );
        Ok(self.stats)
    }

    pub(crate) fn emit_block<S: DocumentSink + ?Sized>(
        &mut self,
        sink: &mut S,
        block: &Block,
    ) -> Result<()> {
        match block.kind() {
            BlockKind::Title => {
                sink.add_title_text(block.text())?;
                self.stats.title_count += 1;
            }
            BlockKind::Heading => {
                sink.add_heading_text(block.text(), block.level())?;
                self.stats.heading_count += 1;
            }
            BlockKind::Paragraph => {
                sink.add_body_text(block.text(), block.alignment())?;
                self.stats.body_count += 1;
            }
            BlockKind::ListItem => {
                sink.add_bullet_text(block.text())?;
                self.stats.bullet_count += 1;
            }
        }

        if let Some(points) = block.space_after() {
            sink.set_space_after(points)?;
            self.stats.spacing_count += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DocumentBuilder;
    use crate::error::Error;
    use crate::model::Alignment;
    use crate::render::{RecordingSink, SinkCall};

    #[test]
    fn test_spacing_follows_its_block() {
        let mut builder = DocumentBuilder::new();
        builder.add_title_page("T", ["Sub"], 24.0).unwrap();
        let mut sink = RecordingSink::new();

        let stats = emit(builder.build(), &mut sink, Path::new("out.docx")).unwrap();

        assert_eq!(
            &sink.calls()[2..4],
            &[
                SinkCall::Body {
                    text: String::new(),
                    alignment: Alignment::Left
                },
                SinkCall::SpaceAfter { points: 24.0 },
            ]
        );
        assert_eq!(stats.block_count(), 3);
        assert_eq!(stats.spacing_count, 1);
    }

    #[test]
    fn test_empty_document_still_finalizes() {
        let mut sink = RecordingSink::new();
        let stats = emit(Document::default(), &mut sink, Path::new("x")).unwrap();
        assert_eq!(stats, EmissionStats::new());
        assert_eq!(sink.calls().len(), 1);
    }

    #[test]
    fn test_abort_on_first_error() {
        let mut builder = DocumentBuilder::new();
        builder.add_paragraph("a").add_paragraph("b").add_paragraph("c");
        let mut sink = RecordingSink::new().failing_at_call(1);

        let err = emit(builder.build(), &mut sink, Path::new("x")).unwrap_err();

        assert!(matches!(err, Error::Sink(_)));
        // The rejected call is the last one; nothing after it, no finalize.
        assert_eq!(sink.calls().len(), 2);
    }
}
