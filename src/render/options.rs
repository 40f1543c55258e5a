//! Rendering options and configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest accepted body font size, in points.
pub const MIN_FONT_SIZE: f32 = 4.0;

/// Largest accepted body font size, in points.
pub const MAX_FONT_SIZE: f32 = 96.0;

/// Output format of a rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Word-processor document (.docx)
    #[default]
    Docx,
    /// Markdown text (.md)
    Markdown,
    /// JSON dump of the document model (.json)
    Json,
}

impl OutputFormat {
    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }

    /// Guess the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "docx" => Some(OutputFormat::Docx),
            "md" | "markdown" => Some(OutputFormat::Markdown),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Options for rendering a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Output format
    pub format: OutputFormat,

    /// Character to use for Markdown bullet markers
    pub list_marker: char,

    /// Default font family for DOCX output
    pub font_family: Option<String>,

    /// Default body font size in points for DOCX output
    pub base_font_size: f32,

    /// Include YAML frontmatter with metadata (Markdown only)
    pub include_frontmatter: bool,

    /// Pretty-print JSON output
    pub pretty_json: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Set the default font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set the default body font size in points.
    ///
    /// Values outside [`MIN_FONT_SIZE`]..=[`MAX_FONT_SIZE`] are clamped.
    pub fn with_font_size(mut self, points: f32) -> Self {
        self.base_font_size = points.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Enable or disable pretty JSON.
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Docx,
            list_marker: '-',
            font_family: None,
            base_font_size: 11.0,
            include_frontmatter: false,
            pretty_json: true,
        }
    }
}
