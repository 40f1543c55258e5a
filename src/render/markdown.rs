//! Markdown rendering for report documents.

use crate::error::{Error, Result};
use crate::model::{Alignment, Document, Metadata};
use std::path::Path;

use super::emit::Emitter;
use super::sink::write_output;
use super::{DocumentSink, RenderOptions};

/// Deepest heading Markdown can express.
const MAX_MARKDOWN_HEADING: usize = 6;

/// Convert a document to a Markdown string without touching the filesystem.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut sink = MarkdownSink::new(options.clone()).with_metadata(doc.metadata.clone());
    let mut emitter = Emitter::new();
    for block in doc.blocks() {
        emitter.emit_block(&mut sink, block)?;
    }
    Ok(sink.content())
}

/// Sink producing Markdown text.
#[derive(Debug, Clone)]
pub struct MarkdownSink {
    options: RenderOptions,
    metadata: Option<Metadata>,
    output: String,
    in_list: bool,
}

impl MarkdownSink {
    /// Create a new Markdown sink.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            metadata: None,
            output: String::new(),
            in_list: false,
        }
    }

    /// Attach metadata for YAML frontmatter.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Rendered Markdown so far, including frontmatter if configured.
    pub fn content(&self) -> String {
        let mut content = String::new();
        if self.options.include_frontmatter {
            if let Some(ref metadata) = self.metadata {
                content.push_str(&metadata.to_yaml_frontmatter());
                content.push('\n');
            }
        }
        content.push_str(self.output.trim_end());
        content.push('\n');
        content
    }

    fn start_block(&mut self) {
        if self.in_list {
            self.output.push('\n');
            self.in_list = false;
        }
    }
}

impl DocumentSink for MarkdownSink {
    fn add_title_text(&mut self, text: &str) -> Result<()> {
        self.start_block();
        self.output.push_str(&format!("# {}\n\n", text.trim()));
        Ok(())
    }

    fn add_heading_text(&mut self, text: &str, level: u8) -> Result<()> {
        if level == 0 {
            return Err(Error::Sink("heading level 0 is reserved for the title".into()));
        }
        self.start_block();
        // The title takes `#`, so sections shift down one level.
        let depth = level as usize + 1;
        if depth > MAX_MARKDOWN_HEADING {
            log::warn!(
                "Heading level {} clamped to Markdown depth {}",
                level,
                MAX_MARKDOWN_HEADING
            );
        }
        let prefix = "#".repeat(depth.min(MAX_MARKDOWN_HEADING));
        self.output.push_str(&format!("{} {}\n\n", prefix, text.trim()));
        Ok(())
    }

    fn add_body_text(&mut self, text: &str, alignment: Alignment) -> Result<()> {
        self.start_block();
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        match alignment {
            Alignment::Left => self.output.push_str(text),
            Alignment::Center => {
                self.output.push_str("<p align=\"center\">");
                self.output.push_str(text);
                self.output.push_str("</p>");
            }
        }
        self.output.push_str("\n\n");
        Ok(())
    }

    fn add_bullet_text(&mut self, text: &str) -> Result<()> {
        if !self.in_list && !self.output.is_empty() && !self.output.ends_with("\n\n") {
            self.output.push('\n');
        }
        self.output
            .push_str(&format!("{} {}\n", self.options.list_marker, text.trim()));
        self.in_list = true;
        Ok(())
    }

    fn set_space_after(&mut self, _points: f32) -> Result<()> {
        // Markdown has no spacing control; a break keeps the gap visible.
        self.start_block();
        self.output.push_str("<br>\n\n");
        Ok(())
    }

    fn finalize(&mut self, output: &Path) -> Result<()> {
        write_output(output, self.content().as_bytes())
    }
}
