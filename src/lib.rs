//! # reportgen
//!
//! Assemble structured report documents and render them to DOCX.
//!
//! A report is built front to back with a [`DocumentBuilder`] into an
//! immutable [`Document`], then emitted exactly once into a
//! [`DocumentSink`](render::DocumentSink) that persists it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use reportgen::{render, DocumentBuilder};
//! use std::path::Path;
//!
//! fn main() -> reportgen::Result<()> {
//!     let mut builder = DocumentBuilder::new();
//!     builder.add_title("Status Report");
//!     builder
//!         .add_heading("1. Progress", 1)?
//!         .add_bullet_list(["Parser done", "Renderer in review"]);
//!
//!     let mut sink = render::DocxSink::new();
//!     render::emit(builder.build(), &mut sink, Path::new("status.docx"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Outline model**: titles, numbered headings, paragraphs, bullet lists
//! - **Pluggable sinks**: DOCX, Markdown, and a recording sink for tests
//! - **Section views**: nested sections and a table-of-contents outline
//! - **JSON export**: the document model round-trips through `serde`

pub mod builder;
pub mod error;
pub mod model;
pub mod render;
pub mod report;

// Re-export commonly used types
pub use builder::DocumentBuilder;
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, BlockKind, BlockStyle, Document, DocumentStats, Metadata, Outline,
    OutlineItem, Section,
};
pub use render::{EmissionStats, JsonFormat, OutputFormat, RenderOptions};
pub use report::{linguaflash_report, DEFAULT_OUTPUT_FILE};

use std::path::Path;

/// Generate the LinguaFlash report as a DOCX file at `path`.
///
/// The file is overwritten if it exists.
///
/// # Example
///
/// ```no_run
/// use reportgen::{generate_report, DEFAULT_OUTPUT_FILE};
///
/// let stats = generate_report(DEFAULT_OUTPUT_FILE).unwrap();
/// println!("{} blocks written", stats.block_count());
/// ```
pub fn generate_report<P: AsRef<Path>>(path: P) -> Result<EmissionStats> {
    generate_report_with_options(path, &RenderOptions::default())
}

/// Generate the LinguaFlash report with custom options.
///
/// # Example
///
/// ```no_run
/// use reportgen::{generate_report_with_options, OutputFormat, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_format(OutputFormat::Markdown)
///     .with_frontmatter(true);
/// generate_report_with_options("report.md", &options).unwrap();
/// ```
pub fn generate_report_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<EmissionStats> {
    let doc = linguaflash_report()?;
    render_document(doc, path, options)
}

/// Render any document to `path` in the format selected by `options`.
///
/// DOCX and Markdown go through the emission walk. JSON serializes the model
/// directly and reports the blocks it contains.
pub fn render_document<P: AsRef<Path>>(
    doc: Document,
    path: P,
    options: &RenderOptions,
) -> Result<EmissionStats> {
    let path = path.as_ref();
    match options.format {
        OutputFormat::Docx => {
            let mut sink = render::DocxSink::with_options(options.clone());
            render::emit(doc, &mut sink, path)
        }
        OutputFormat::Markdown => {
            let mut sink =
                render::MarkdownSink::new(options.clone()).with_metadata(doc.metadata.clone());
            render::emit(doc, &mut sink, path)
        }
        OutputFormat::Json => {
            let format = if options.pretty_json {
                JsonFormat::Pretty
            } else {
                JsonFormat::Compact
            };
            let json = render::to_json(&doc, format)?;
            render::write_output(path, json.as_bytes())?;
            Ok(json_stats(&doc))
        }
    }
}

fn json_stats(doc: &Document) -> EmissionStats {
    let stats = doc.stats();
    EmissionStats {
        title_count: stats.title_count,
        heading_count: stats.heading_count,
        body_count: stats.paragraph_count + stats.spacer_count,
        bullet_count: stats.list_item_count,
        spacing_count: doc
            .blocks()
            .iter()
            .filter(|b| b.space_after().is_some())
            .count() as u32,
    }
}
