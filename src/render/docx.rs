//! DOCX rendering backed by `docx-rs`.
//!
//! Paragraphs are collected in memory as they arrive and packaged into a
//! single `.docx` archive at finalize time. The archive is serialized into a
//! buffer before anything touches the filesystem, so a packaging failure
//! never leaves a half-written file behind.

use crate::error::{Error, Result};
use crate::model::{Alignment, MAX_HEADING_LEVEL};
use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, LineSpacing,
    NumberFormat, Numbering, NumberingId, Paragraph, Run, RunFonts, SpecialIndentType, Start,
    Style, StyleType,
};
use std::io::Cursor;
use std::path::Path;

use super::sink::write_output;
use super::{DocumentSink, RenderOptions};

/// Numbering definition shared by every bullet item.
const BULLET_NUMBERING_ID: usize = 1;

const TITLE_STYLE: &str = "Title";
const LIST_BULLET_STYLE: &str = "ListBullet";

/// Sink producing a Word document.
#[derive(Debug)]
pub struct DocxSink {
    options: RenderOptions,
    paragraphs: Vec<Paragraph>,
    finalized: bool,
}

impl DocxSink {
    /// Create a DOCX sink with default options.
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Create a DOCX sink with custom options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            paragraphs: Vec::new(),
            finalized: false,
        }
    }

    /// Number of paragraphs appended so far.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Package everything appended so far into `.docx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut docx = Docx::new().default_size(half_points(self.options.base_font_size));
        if let Some(ref family) = self.options.font_family {
            docx = docx.default_fonts(
                RunFonts::new()
                    .ascii(family.as_str())
                    .hi_ansi(family.as_str())
                    .east_asia(family.as_str())
                    .cs(family.as_str()),
            );
        }
        for style in document_styles() {
            docx = docx.add_style(style);
        }
        docx = docx
            .add_abstract_numbering(bullet_numbering())
            .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));
        for paragraph in &self.paragraphs {
            docx = docx.add_paragraph(paragraph.clone());
        }

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| Error::Sink(format!("DOCX packaging failed: {}", e)))?;
        Ok(buf.into_inner())
    }

    fn push(&mut self, paragraph: Paragraph) -> Result<()> {
        self.ensure_open()?;
        self.paragraphs.push(paragraph);
        Ok(())
    }

    fn ensure_open(&self) -> Result<()> {
        if self.finalized {
            return Err(Error::Sink("DOCX sink is already finalized".into()));
        }
        Ok(())
    }
}

impl Default for DocxSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSink for DocxSink {
    fn add_title_text(&mut self, text: &str) -> Result<()> {
        let paragraph = text_paragraph(text)
            .style(TITLE_STYLE)
            .align(AlignmentType::Center);
        self.push(paragraph)
    }

    fn add_heading_text(&mut self, text: &str, level: u8) -> Result<()> {
        if level == 0 || level > MAX_HEADING_LEVEL {
            return Err(Error::Sink(format!(
                "DOCX supports heading levels 1-{}, got {}",
                MAX_HEADING_LEVEL, level
            )));
        }
        let paragraph = text_paragraph(text).style(&heading_style_id(level));
        self.push(paragraph)
    }

    fn add_body_text(&mut self, text: &str, alignment: Alignment) -> Result<()> {
        let paragraph = text_paragraph(text).align(alignment_type(alignment));
        self.push(paragraph)
    }

    fn add_bullet_text(&mut self, text: &str) -> Result<()> {
        let paragraph = text_paragraph(text)
            .style(LIST_BULLET_STYLE)
            .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0));
        self.push(paragraph)
    }

    fn set_space_after(&mut self, points: f32) -> Result<()> {
        self.ensure_open()?;
        let last = self
            .paragraphs
            .pop()
            .ok_or_else(|| Error::Sink("spacing directive without a preceding paragraph".into()))?;
        self.paragraphs
            .push(last.line_spacing(LineSpacing::new().after(twips(points))));
        Ok(())
    }

    fn finalize(&mut self, output: &Path) -> Result<()> {
        self.ensure_open()?;
        self.finalized = true;
        let bytes = self.to_bytes()?;
        write_output(output, &bytes)
    }
}

fn text_paragraph(text: &str) -> Paragraph {
    if text.is_empty() {
        Paragraph::new()
    } else {
        Paragraph::new().add_run(Run::new().add_text(text))
    }
}

fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
    }
}

fn heading_style_id(level: u8) -> String {
    format!("Heading{}", level)
}

/// Points to twentieths of a point.
fn twips(points: f32) -> u32 {
    (points.max(0.0) * 20.0).round() as u32
}

/// Points to half-points, the unit of DOCX font sizes.
fn half_points(points: f32) -> usize {
    (points.max(1.0) * 2.0).round() as usize
}

fn document_styles() -> Vec<Style> {
    let mut styles = vec![Style::new(TITLE_STYLE, StyleType::Paragraph)
        .name("Title")
        .size(half_points(28.0))];

    for level in 1..=MAX_HEADING_LEVEL {
        let size = match level {
            1 => 16.0,
            2 => 13.0,
            3 => 12.0,
            _ => 11.0,
        };
        styles.push(
            Style::new(heading_style_id(level), StyleType::Paragraph)
                .name(format!("Heading {}", level))
                .size(half_points(size))
                .bold(),
        );
    }

    styles.push(Style::new(LIST_BULLET_STYLE, StyleType::Paragraph).name("List Bullet"));
    styles
}

fn bullet_numbering() -> AbstractNumbering {
    AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("\u{2022}"),
            LevelJc::new("left"),
        )
        .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversions() {
        assert_eq!(twips(24.0), 480);
        assert_eq!(twips(0.5), 10);
        assert_eq!(half_points(11.0), 22);
        assert_eq!(half_points(10.5), 21);
    }

    #[test]
    fn test_spacing_requires_paragraph() {
        let mut sink = DocxSink::new();
        let err = sink.set_space_after(12.0).unwrap_err();
        assert!(matches!(err, Error::Sink(_)));
    }

    #[test]
    fn test_spacing_does_not_add_paragraph() {
        let mut sink = DocxSink::new();
        sink.add_body_text("", Alignment::Left).unwrap();
        sink.set_space_after(24.0).unwrap();
        assert_eq!(sink.paragraph_count(), 1);
    }

    #[test]
    fn test_rejects_out_of_range_heading() {
        let mut sink = DocxSink::new();
        assert!(sink.add_heading_text("zero", 0).is_err());
        assert!(sink.add_heading_text("ten", 10).is_err());
        assert!(sink.add_heading_text("one", 1).is_ok());
        assert_eq!(sink.paragraph_count(), 1);
    }

    #[test]
    fn test_to_bytes_is_zip_archive() {
        let mut sink = DocxSink::new();
        sink.add_title_text("Report").unwrap();
        sink.add_bullet_text("item").unwrap();

        let bytes = sink.to_bytes().unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_finalize_only_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.docx");
        let mut sink = DocxSink::new();
        sink.add_title_text("Report").unwrap();

        sink.finalize(&path).unwrap();
        assert!(path.exists());
        assert!(sink.finalize(&path).is_err());
        assert!(sink.add_body_text("late", Alignment::Left).is_err());
    }
}
