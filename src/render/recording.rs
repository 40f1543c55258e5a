//! In-memory sink that records every call it receives.

use crate::error::{Error, Result};
use crate::model::Alignment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::DocumentSink;

/// One call received by a [`DocumentSink`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum SinkCall {
    /// `add_title_text`
    Title {
        /// Title text
        text: String,
    },
    /// `add_heading_text`
    Heading {
        /// Heading text
        text: String,
        /// Heading level
        level: u8,
    },
    /// `add_body_text`
    Body {
        /// Paragraph text
        text: String,
        /// Paragraph alignment
        alignment: Alignment,
    },
    /// `add_bullet_text`
    Bullet {
        /// Item text
        text: String,
    },
    /// `set_space_after`
    SpaceAfter {
        /// Space in points
        points: f32,
    },
    /// `finalize`
    Finalize {
        /// Destination path
        path: PathBuf,
    },
}

impl SinkCall {
    /// Check if this call appends a block.
    pub fn is_append(&self) -> bool {
        !matches!(self, SinkCall::SpaceAfter { .. } | SinkCall::Finalize { .. })
    }

    /// Get the block text if this call appends a block.
    pub fn text(&self) -> Option<&str> {
        match self {
            SinkCall::Title { text }
            | SinkCall::Heading { text, .. }
            | SinkCall::Body { text, .. }
            | SinkCall::Bullet { text } => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for SinkCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkCall::Title { text } => write!(f, "add_title_text({:?})", text),
            SinkCall::Heading { text, level } => {
                write!(f, "add_heading_text({:?}, {})", text, level)
            }
            SinkCall::Body { text, alignment } => {
                write!(f, "add_body_text({:?}, {:?})", text, alignment)
            }
            SinkCall::Bullet { text } => write!(f, "add_bullet_text({:?})", text),
            SinkCall::SpaceAfter { points } => write!(f, "set_space_after({})", points),
            SinkCall::Finalize { path } => write!(f, "finalize({:?})", path.display().to_string()),
        }
    }
}

/// Sink that records calls instead of rendering anything.
///
/// Optionally fails on the N-th call or at finalize, for exercising error
/// paths. A failing call is still recorded.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    calls: Vec<SinkCall>,
    fail_at_call: Option<usize>,
    fail_on_finalize: bool,
}

impl RecordingSink {
    /// Create a new recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the call with the given zero-based index.
    pub fn failing_at_call(mut self, index: usize) -> Self {
        self.fail_at_call = Some(index);
        self
    }

    /// Fail when finalize is called.
    pub fn failing_on_finalize(mut self) -> Self {
        self.fail_on_finalize = true;
        self
    }

    /// Calls recorded so far.
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// Consume the sink, returning the recorded calls.
    pub fn into_calls(self) -> Vec<SinkCall> {
        self.calls
    }

    fn record(&mut self, call: SinkCall) -> Result<()> {
        let index = self.calls.len();
        let is_finalize = matches!(call, SinkCall::Finalize { .. });
        self.calls.push(call);

        if self.fail_at_call == Some(index) {
            return Err(Error::Sink(format!("recording sink rejected call {}", index)));
        }
        if is_finalize && self.fail_on_finalize {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "recording sink refused to finalize",
            )));
        }
        Ok(())
    }
}

impl DocumentSink for RecordingSink {
    fn add_title_text(&mut self, text: &str) -> Result<()> {
        self.record(SinkCall::Title { text: text.into() })
    }

    fn add_heading_text(&mut self, text: &str, level: u8) -> Result<()> {
        self.record(SinkCall::Heading {
            text: text.into(),
            level,
        })
    }

    fn add_body_text(&mut self, text: &str, alignment: Alignment) -> Result<()> {
        self.record(SinkCall::Body {
            text: text.into(),
            alignment,
        })
    }

    fn add_bullet_text(&mut self, text: &str) -> Result<()> {
        self.record(SinkCall::Bullet { text: text.into() })
    }

    fn set_space_after(&mut self, points: f32) -> Result<()> {
        self.record(SinkCall::SpaceAfter { points })
    }

    fn finalize(&mut self, output: &Path) -> Result<()> {
        self.record(SinkCall::Finalize {
            path: output.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut sink = RecordingSink::new();
        sink.add_title_text("T").unwrap();
        sink.add_bullet_text("b").unwrap();
        sink.finalize(Path::new("out.docx")).unwrap();

        assert_eq!(
            sink.calls(),
            &[
                SinkCall::Title { text: "T".into() },
                SinkCall::Bullet { text: "b".into() },
                SinkCall::Finalize {
                    path: PathBuf::from("out.docx")
                },
            ]
        );
    }

    #[test]
    fn test_failing_at_call() {
        let mut sink = RecordingSink::new().failing_at_call(1);
        assert!(sink.add_title_text("T").is_ok());
        assert!(matches!(sink.add_body_text("x", Alignment::Left), Err(Error::Sink(_))));
    }

    #[test]
    fn test_failing_on_finalize() {
        let mut sink = RecordingSink::new().failing_on_finalize();
        let err = sink.finalize(Path::new("out.docx")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_display() {
        let call = SinkCall::Heading {
            text: "1. Intro".into(),
            level: 1,
        };
        assert_eq!(call.to_string(), "add_heading_text(\"1. Intro\", 1)");
        assert!(call.is_append());
        assert!(!SinkCall::SpaceAfter { points: 1.0 }.is_append());
    }
}
