//! Document-level types.

use super::block::RawBlock;
use super::{Block, BlockKind};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully assembled report document.
///
/// Built once by [`DocumentBuilder`](crate::builder::DocumentBuilder) and
/// consumed by value when emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDocument")]
pub struct Document {
    /// Descriptive metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Blocks in document order
    blocks: Vec<Block>,
}

/// Serialized document whose blocks have not been validated yet.
#[derive(Debug, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    metadata: Metadata,
    #[serde(default)]
    blocks: Vec<RawBlock>,
}

impl TryFrom<RawDocument> for Document {
    type Error = Error;

    fn try_from(raw: RawDocument) -> Result<Self> {
        let blocks = raw
            .blocks
            .into_iter()
            .map(Block::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_parts(raw.metadata, blocks))
    }
}

impl Document {
    pub(crate) fn from_parts(metadata: Metadata, blocks: Vec<Block>) -> Self {
        Self { metadata, blocks }
    }

    /// Blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Consume the document, yielding its blocks in order.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Blocks that precede the first heading (title page content).
    pub fn preamble(&self) -> &[Block] {
        let end = self
            .blocks
            .iter()
            .position(Block::is_heading)
            .unwrap_or(self.blocks.len());
        &self.blocks[..end]
    }

    /// All sections, in document order.
    ///
    /// Each heading opens a section that runs until the next heading at the
    /// same or a shallower level, so nested sections overlap their parents.
    pub fn sections(&self) -> Vec<Section<'_>> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| block.is_heading())
            .map(|(start, heading)| {
                let end = self.blocks[start + 1..]
                    .iter()
                    .position(|b| b.is_heading() && b.level() <= heading.level())
                    .map(|offset| start + 1 + offset)
                    .unwrap_or(self.blocks.len());
                Section {
                    heading,
                    blocks: &self.blocks[start + 1..end],
                }
            })
            .collect()
    }

    /// Build the nested heading outline (table of contents).
    pub fn outline(&self) -> Outline {
        let mut outline = Outline::new();
        for (index, block) in self.blocks.iter().enumerate() {
            if block.is_heading() {
                outline.insert(OutlineItem::new(block.text(), block.level(), index));
            }
        }
        outline
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter(|block| !block.is_empty())
            .map(|block| block.text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Count blocks by kind and words across the document.
    pub fn stats(&self) -> DocumentStats {
        let mut stats = DocumentStats::default();
        for block in &self.blocks {
            match block.kind() {
                BlockKind::Title => stats.title_count += 1,
                BlockKind::Heading => stats.heading_count += 1,
                BlockKind::Paragraph if block.is_empty() => stats.spacer_count += 1,
                BlockKind::Paragraph => stats.paragraph_count += 1,
                BlockKind::ListItem => stats.list_item_count += 1,
            }
            stats.word_count += block.text().split_whitespace().count() as u32;
        }
        stats
    }
}

/// A view over the blocks grouped under one heading.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    heading: &'a Block,
    blocks: &'a [Block],
}

impl<'a> Section<'a> {
    /// The heading block that opens this section.
    pub fn heading(&self) -> &'a Block {
        self.heading
    }

    /// Heading text.
    pub fn title(&self) -> &'a str {
        self.heading.text()
    }

    /// Heading level.
    pub fn level(&self) -> u8 {
        self.heading.level()
    }

    /// Every block under the heading, nested subsections included.
    pub fn blocks(&self) -> &'a [Block] {
        self.blocks
    }

    /// Blocks directly under the heading, up to the first nested heading.
    pub fn content(&self) -> &'a [Block] {
        let end = self
            .blocks
            .iter()
            .position(Block::is_heading)
            .unwrap_or(self.blocks.len());
        &self.blocks[..end]
    }
}

/// Block counts for a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of title blocks
    pub title_count: u32,
    /// Number of headings
    pub heading_count: u32,
    /// Number of paragraphs with text
    pub paragraph_count: u32,
    /// Number of empty spacing paragraphs
    pub spacer_count: u32,
    /// Number of bullet list items
    pub list_item_count: u32,
    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Creation date; never filled in implicitly
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Check if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.subject.is_none()
            && self.author.is_none()
            && self.created.is_none()
    }

    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref subject) = self.subject {
            lines.push(format!("subject: \"{}\"", escape_yaml(subject)));
        }
        if let Some(ref author) = self.author {
            lines.push(format!("author: \"{}\"", escape_yaml(author)));
        }
        if let Some(ref created) = self.created {
            lines.push(format!("created: {}", created.to_rfc3339()));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Document outline (table of contents).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Top-level outline items
    pub items: Vec<OutlineItem>,
}

impl Outline {
    /// Create a new empty outline.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert an item under the deepest open item with a smaller level.
    pub fn insert(&mut self, item: OutlineItem) {
        fn insert_into(items: &mut Vec<OutlineItem>, item: OutlineItem) {
            match items.last_mut() {
                Some(last) if last.level < item.level => insert_into(&mut last.children, item),
                _ => items.push(item),
            }
        }
        insert_into(&mut self.items, item);
    }

    /// Check if the outline is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the total number of items (including nested).
    pub fn total_items(&self) -> usize {
        fn count_items(items: &[OutlineItem]) -> usize {
            items
                .iter()
                .map(|item| 1 + count_items(&item.children))
                .sum()
        }
        count_items(&self.items)
    }

    /// Render the outline as an indented text tree.
    pub fn to_text(&self) -> String {
        fn write_items(out: &mut String, items: &[OutlineItem], depth: usize) {
            for item in items {
                out.push_str(&"  ".repeat(depth));
                out.push_str(&item.title);
                out.push('\n');
                write_items(out, &item.children, depth + 1);
            }
        }
        let mut out = String::new();
        write_items(&mut out, &self.items, 0);
        out
    }
}

/// A single outline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineItem {
    /// Heading text
    pub title: String,

    /// Heading level (1 = top level)
    pub level: u8,

    /// Index of the heading block in the document
    pub block_index: usize,

    /// Child items
    pub children: Vec<OutlineItem>,
}

impl OutlineItem {
    /// Create a new outline item.
    pub fn new(title: impl Into<String>, level: u8, block_index: usize) -> Self {
        Self {
            title: title.into(),
            level,
            block_index,
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::from_parts(
            Metadata::default(),
            vec![
                Block::title("Report"),
                Block::heading("1. Intro", 1).unwrap(),
                Block::paragraph("Intro text"),
                Block::heading("1.1 Detail", 2).unwrap(),
                Block::list_item("a"),
                Block::list_item("b"),
                Block::heading("2. Next", 1).unwrap(),
                Block::paragraph("Closing words here"),
            ],
        )
    }

    #[test]
    fn test_document_default() {
        let doc = Document::default();
        assert!(doc.is_empty());
        assert!(doc.sections().is_empty());
        assert!(doc.outline().is_empty());
    }

    #[test]
    fn test_sections_nest() {
        let doc = sample();
        let sections = doc.sections();
        assert_eq!(sections.len(), 3);

        assert_eq!(sections[0].title(), "1. Intro");
        assert_eq!(sections[0].blocks().len(), 4);
        assert_eq!(sections[0].content().len(), 1);

        assert_eq!(sections[1].level(), 2);
        assert_eq!(sections[1].blocks().len(), 2);

        assert_eq!(sections[2].title(), "2. Next");
        assert_eq!(sections[2].blocks().len(), 1);
    }

    #[test]
    fn test_preamble() {
        let doc = sample();
        assert_eq!(doc.preamble().len(), 1);
        assert_eq!(doc.preamble()[0].text(), "Report");
    }

    #[test]
    fn test_outline() {
        let outline = sample().outline();
        assert_eq!(outline.items.len(), 2);
        assert_eq!(outline.items[0].children.len(), 1);
        assert_eq!(outline.items[0].children[0].block_index, 3);
        assert_eq!(outline.total_items(), 3);
        assert_eq!(outline.to_text(), "1. Intro\n  1.1 Detail\n2. Next\n");
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.title_count, 1);
        assert_eq!(stats.heading_count, 3);
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.list_item_count, 2);
        assert_eq!(stats.spacer_count, 0);
    }

    #[test]
    fn test_metadata_frontmatter() {
        let mut metadata = Metadata::with_title("Test \"Report\"");
        metadata.author = Some("Team".to_string());

        let yaml = metadata.to_yaml_frontmatter();
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("title: \"Test \\\"Report\\\"\""));
        assert!(yaml.contains("author: \"Team\""));
        assert!(!yaml.contains("created"));
    }
}
