//! Rendering module: the sink capability, the emission walk, and the
//! concrete output formats.

pub mod docx;
pub mod emit;
mod json;
pub mod markdown;
mod options;
pub mod recording;
mod sink;

pub use docx::DocxSink;
pub use emit::{emit, EmissionStats, Emitter};
pub use json::{from_json, to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownSink};
pub use options::{OutputFormat, RenderOptions, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use recording::{RecordingSink, SinkCall};
pub use sink::DocumentSink;
pub(crate) use sink::write_output;
