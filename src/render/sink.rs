//! The document sink capability consumed by the emission walk.
//!
//! A sink receives one append call per block, in document order, followed by
//! a single [`finalize`](DocumentSink::finalize). How it persists the result
//! is its own business.
//!
//! # Example
//!
//! ```
//! use reportgen::render::DocumentSink;
//! use reportgen::{Alignment, Result};
//! use std::path::Path;
//!
//! /// Sink that only counts the blocks it receives.
//! #[derive(Default)]
//! struct CountingSink {
//!     blocks: usize,
//! }
//!
//! impl DocumentSink for CountingSink {
//!     fn add_title_text(&mut self, _text: &str) -> Result<()> {
//!         self.blocks += 1;
//!         Ok(())
//!     }
//!     fn add_heading_text(&mut self, _text: &str, _level: u8) -> Result<()> {
//!         self.blocks += 1;
//!         Ok(())
//!     }
//!     fn add_body_text(&mut self, _text: &str, _alignment: Alignment) -> Result<()> {
//!         self.blocks += 1;
//!         Ok(())
//!     }
//!     fn add_bullet_text(&mut self, _text: &str) -> Result<()> {
//!         self.blocks += 1;
//!         Ok(())
//!     }
//!     fn set_space_after(&mut self, _points: f32) -> Result<()> {
//!         Ok(())
//!     }
//!     fn finalize(&mut self, _output: &Path) -> Result<()> {
//!         Ok(())
//!     }
//! }
//! ```

use crate::error::Result;
use crate::model::Alignment;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Rendering backend that accepts blocks and persists a finished document.
pub trait DocumentSink {
    /// Append the document title.
    fn add_title_text(&mut self, text: &str) -> Result<()>;

    /// Append a heading at `level` (1 = top-level section).
    fn add_heading_text(&mut self, text: &str, level: u8) -> Result<()>;

    /// Append a body paragraph.
    fn add_body_text(&mut self, text: &str, alignment: Alignment) -> Result<()>;

    /// Append a bulleted list item.
    fn add_bullet_text(&mut self, text: &str) -> Result<()>;

    /// Set the trailing space, in points, of the most recently appended block.
    fn set_space_after(&mut self, points: f32) -> Result<()>;

    /// Persist everything appended so far to `output`.
    ///
    /// Called exactly once, after the last block.
    fn finalize(&mut self, output: &Path) -> Result<()>;
}

impl<S: DocumentSink + ?Sized> DocumentSink for &mut S {
    fn add_title_text(&mut self, text: &str) -> Result<()> {
        (**self).add_title_text(text)
    }

    fn add_heading_text(&mut self, text: &str, level: u8) -> Result<()> {
        (**self).add_heading_text(text, level)
    }

    fn add_body_text(&mut self, text: &str, alignment: Alignment) -> Result<()> {
        (**self).add_body_text(text, alignment)
    }

    fn add_bullet_text(&mut self, text: &str) -> Result<()> {
        (**self).add_bullet_text(text)
    }

    fn set_space_after(&mut self, points: f32) -> Result<()> {
        (**self).set_space_after(points)
    }

    fn finalize(&mut self, output: &Path) -> Result<()> {
        (**self).finalize(output)
    }
}

impl<S: DocumentSink + ?Sized> DocumentSink for Box<S> {
    fn add_title_text(&mut self, text: &str) -> Result<()> {
        (**self).add_title_text(text)
    }

    fn add_heading_text(&mut self, text: &str, level: u8) -> Result<()> {
        (**self).add_heading_text(text, level)
    }

    fn add_body_text(&mut self, text: &str, alignment: Alignment) -> Result<()> {
        (**self).add_body_text(text, alignment)
    }

    fn add_bullet_text(&mut self, text: &str) -> Result<()> {
        (**self).add_bullet_text(text)
    }

    fn set_space_after(&mut self, points: f32) -> Result<()> {
        (**self).set_space_after(points)
    }

    fn finalize(&mut self, output: &Path) -> Result<()> {
        (**self).finalize(output)
    }
}

/// Write `bytes` to `output` in one step.
///
/// The bytes are staged in a temporary file next to `output` and renamed over
/// it, so the destination is either fully replaced or left untouched.
pub(crate) fn write_output(output: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = tempfile::Builder::new()
        .prefix(".reportgen-")
        .tempfile_in(dir)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;
    if let Some(permissions) = output_permissions(output) {
        staged.as_file().set_permissions(permissions)?;
    }

    staged.persist(output).map_err(|e| {
        log::debug!("Failed to replace {}: {}", output.display(), e.error);
        e.error
    })?;
    log::info!("Wrote {} bytes to {}", bytes.len(), output.display());
    Ok(())
}

/// Permissions the finished file should carry: those of the file it
/// replaces, or the usual mode for a new file.
fn output_permissions(output: &Path) -> Option<fs::Permissions> {
    if let Ok(existing) = fs::metadata(output) {
        return Some(existing.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_output_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.docx");
        let err = write_output(&path, b"data").unwrap_err();
        assert!(err.is_sink_error());
        assert!(!path.exists());
    }

    fn staged_leftovers(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(".reportgen-"))
            .count()
    }

    #[test]
    fn test_failed_write_leaves_destination_in_place() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory cannot be replaced by a file.
        let path = dir.path().join("report.docx");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), b"earlier run").unwrap();

        let err = write_output(&path, b"new report").unwrap_err();

        assert!(err.is_sink_error());
        assert!(path.is_dir());
        assert_eq!(fs::read(path.join("keep.txt")).unwrap(), b"earlier run");
        assert_eq!(staged_leftovers(dir.path()), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_destination_is_replaced_whole() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        fs::write(&path, b"earlier run").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

        write_output(&path, b"new report").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new report");
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o444);
        assert_eq!(staged_leftovers(dir.path()), 0);
    }

    #[test]
    fn test_write_output_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_output(&path, b"first run, longer content").unwrap();
        write_output(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
    }
}
