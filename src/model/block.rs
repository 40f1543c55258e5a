//! Block-level content types.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Deepest heading level a block may carry.
///
/// Word processors ship styles for `Heading 1` through `Heading 9`.
pub const MAX_HEADING_LEVEL: u8 = 9;

/// The closed set of emittable block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Document title (level 0)
    Title,
    /// Section heading (level >= 1)
    Heading,
    /// Body text paragraph
    Paragraph,
    /// Bulleted list entry
    ListItem,
}

/// Paragraph style applied to a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockStyle {
    /// Document title style
    Title,
    /// Heading style matching the block level
    Heading,
    /// Regular body text
    #[default]
    Body,
    /// Bulleted list style
    BulletList,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
}

/// One atomic unit of document content.
///
/// Attributes are fixed at construction; styling is never derived later
/// from neighbouring blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock")]
pub struct Block {
    kind: BlockKind,
    text: String,
    level: u8,
    style: BlockStyle,
    alignment: Alignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    space_after: Option<f32>,
}

/// Unvalidated block fields as they appear in serialized documents.
///
/// Deserialization routes through the validating constructors, so a
/// loaded block obeys the same rules as one built in code.
#[derive(Debug, Deserialize)]
pub struct RawBlock {
    kind: BlockKind,
    #[serde(default)]
    text: String,
    #[serde(default)]
    level: u8,
    #[serde(default)]
    style: Option<BlockStyle>,
    #[serde(default)]
    alignment: Option<Alignment>,
    #[serde(default)]
    space_after: Option<f32>,
}

impl TryFrom<RawBlock> for Block {
    type Error = Error;

    fn try_from(raw: RawBlock) -> Result<Self> {
        let block = match raw.kind {
            BlockKind::Heading => Block::heading(raw.text, raw.level)?,
            BlockKind::Title => Block::title(raw.text),
            BlockKind::Paragraph => {
                Block::paragraph(raw.text).with_alignment(raw.alignment.unwrap_or_default())
            }
            BlockKind::ListItem => Block::list_item(raw.text),
        };

        if block.level != raw.level {
            return Err(Error::InvalidBlock(format!(
                "{:?} block cannot carry heading level {}",
                raw.kind, raw.level
            )));
        }
        if let Some(style) = raw.style.filter(|style| *style != block.style) {
            return Err(Error::InvalidBlock(format!(
                "{:?} block cannot use {:?} style",
                raw.kind, style
            )));
        }
        if let Some(alignment) = raw.alignment.filter(|a| *a != block.alignment) {
            return Err(Error::InvalidBlock(format!(
                "{:?} block cannot be {:?} aligned",
                raw.kind, alignment
            )));
        }

        match raw.space_after {
            Some(points) => block.with_space_after(points),
            None => Ok(block),
        }
    }
}

impl Block {
    /// Create the document title block (level 0, centered).
    pub fn title(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Title,
            text: text.into(),
            level: 0,
            style: BlockStyle::Title,
            alignment: Alignment::Center,
            space_after: None,
        }
    }

    /// Create a heading block.
    ///
    /// Fails with [`Error::InvalidBlock`] unless `1 <= level <= MAX_HEADING_LEVEL`.
    pub fn heading(text: impl Into<String>, level: u8) -> Result<Self> {
        if level == 0 {
            return Err(Error::InvalidBlock(
                "heading level must be at least 1 (level 0 is reserved for the title)".into(),
            ));
        }
        if level > MAX_HEADING_LEVEL {
            return Err(Error::InvalidBlock(format!(
                "heading level {} exceeds maximum of {}",
                level, MAX_HEADING_LEVEL
            )));
        }
        Ok(Self {
            kind: BlockKind::Heading,
            text: text.into(),
            level,
            style: BlockStyle::Heading,
            alignment: Alignment::Left,
            space_after: None,
        })
    }

    /// Create a left-aligned body paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: text.into(),
            level: 0,
            style: BlockStyle::Body,
            alignment: Alignment::Left,
            space_after: None,
        }
    }

    /// Create a bulleted list item.
    pub fn list_item(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::ListItem,
            text: text.into(),
            level: 0,
            style: BlockStyle::BulletList,
            alignment: Alignment::Left,
            space_after: None,
        }
    }

    /// Create an empty paragraph whose only effect is trailing space.
    pub fn spacer(points: f32) -> Result<Self> {
        Self::paragraph(String::new()).with_space_after(points)
    }

    /// Set the trailing space in points.
    pub fn with_space_after(mut self, points: f32) -> Result<Self> {
        if !points.is_finite() || points < 0.0 {
            return Err(Error::InvalidBlock(format!(
                "space after must be a non-negative number of points, got {}",
                points
            )));
        }
        self.space_after = Some(points);
        Ok(self)
    }

    /// Set the horizontal alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Block kind.
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Text content (empty for spacers).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Heading depth; 0 for the title and for non-heading blocks.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Paragraph style.
    pub fn style(&self) -> BlockStyle {
        self.style
    }

    /// Horizontal alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Trailing space in points, if any.
    pub fn space_after(&self) -> Option<f32> {
        self.space_after
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.kind == BlockKind::Heading
    }

    /// Check if this block carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_block() {
        let title = Block::title("LinguaFlash");
        assert_eq!(title.kind(), BlockKind::Title);
        assert_eq!(title.level(), 0);
        assert_eq!(title.alignment(), Alignment::Center);
        assert_eq!(title.style(), BlockStyle::Title);
    }

    #[test]
    fn test_heading_levels() {
        let h2 = Block::heading("1.1 Scope", 2).unwrap();
        assert!(h2.is_heading());
        assert_eq!(h2.level(), 2);

        assert!(matches!(
            Block::heading("bad", 0),
            Err(Error::InvalidBlock(_))
        ));
        assert!(matches!(
            Block::heading("too deep", MAX_HEADING_LEVEL + 1),
            Err(Error::InvalidBlock(_))
        ));
        assert!(Block::heading("deepest", MAX_HEADING_LEVEL).is_ok());
    }

    #[test]
    fn test_spacer() {
        let spacer = Block::spacer(24.0).unwrap();
        assert_eq!(spacer.kind(), BlockKind::Paragraph);
        assert!(spacer.is_empty());
        assert_eq!(spacer.space_after(), Some(24.0));

        assert!(Block::spacer(-1.0).is_err());
        assert!(Block::spacer(f32::NAN).is_err());
    }

    fn raw(json: &str) -> std::result::Result<Block, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_deserialize_validates() {
        let heading = raw(r#"{"kind":"heading","text":"H","level":2,"style":"heading"}"#).unwrap();
        assert_eq!(heading, Block::heading("H", 2).unwrap());

        assert!(raw(r#"{"kind":"heading","text":"H","level":0}"#).is_err());
        assert!(raw(r#"{"kind":"paragraph","text":"","space_after":-50.0}"#).is_err());
        assert!(raw(r#"{"kind":"title","text":"T","style":"bullet_list"}"#).is_err());
        assert!(raw(r#"{"kind":"list_item","text":"x","level":3}"#).is_err());
        assert!(raw(r#"{"kind":"list_item","text":"x","alignment":"center"}"#).is_err());
    }

    #[test]
    fn test_deserialize_centered_paragraph() {
        let block = raw(r#"{"kind":"paragraph","text":"Sub","alignment":"center"}"#).unwrap();
        assert_eq!(block.alignment(), Alignment::Center);
        assert_eq!(block.style(), BlockStyle::Body);
    }

    #[test]
    fn test_list_item_style() {
        let item = Block::list_item("FR-1");
        assert_eq!(item.style(), BlockStyle::BulletList);
        assert_eq!(item.alignment(), Alignment::Left);
        assert_eq!(item.space_after(), None);
    }
}
