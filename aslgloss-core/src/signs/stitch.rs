//! Clip stitching
//!
//! Rendering video is left to external tools. The built-in stitcher writes
//! an ffmpeg concat-demuxer manifest that plays the clips in order.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GlossError, Result};

/// Stitching options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StitchOptions {
    /// Cross-fade between consecutive clips
    pub transitions: bool,
    /// Target frame size as (width, height)
    pub resize: Option<(u32, u32)>,
}

impl Default for StitchOptions {
    fn default() -> Self {
        Self {
            transitions: true,
            resize: Some((640, 480)),
        }
    }
}

/// Joins sign clips into one artifact
pub trait VideoStitcher: Send + Sync {
    /// Stitch `clips` in order into `output` and return the written path
    fn stitch(
        &self,
        clips: &[PathBuf],
        options: &StitchOptions,
        output: &Path,
    ) -> Result<PathBuf>;

    /// Stitcher name for logging
    fn name(&self) -> &'static str;
}

/// Writes an ffmpeg concat manifest
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcatManifest;

impl ConcatManifest {
    /// Create a new manifest stitcher
    pub fn new() -> Self {
        Self
    }

    /// Manifest text for a clip list
    pub fn render(&self, clips: &[PathBuf], options: &StitchOptions) -> String {
        let mut out = String::from("ffconcat version 1.0\n");

        let _ = writeln!(
            out,
            "# transitions: {}",
            if options.transitions { "on" } else { "off" }
        );
        match options.resize {
            Some((width, height)) => {
                let _ = writeln!(out, "# resize: {width}x{height}");
            }
            None => out.push_str("# resize: off\n"),
        }

        for clip in clips {
            let _ = writeln!(out, "file '{}'", escape(&clip.to_string_lossy()));
        }
        out
    }
}

/// Quote escaping of the concat demuxer
fn escape(path: &str) -> String {
    path.replace('\'', r"'\''")
}

impl VideoStitcher for ConcatManifest {
    fn stitch(
        &self,
        clips: &[PathBuf],
        options: &StitchOptions,
        output: &Path,
    ) -> Result<PathBuf> {
        if clips.is_empty() {
            return Err(GlossError::NothingToStitch);
        }

        fs::write(output, self.render(clips, options)).map_err(|source| GlossError::Stitch {
            path: output.to_path_buf(),
            source,
        })?;

        tracing::info!(
            stitcher = self.name(),
            clips = clips.len(),
            output = %output.display(),
            "wrote clip manifest"
        );
        Ok(output.to_path_buf())
    }

    fn name(&self) -> &'static str {
        "concat-manifest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_options() {
        let options = StitchOptions::default();
        assert!(options.transitions);
        assert_eq!(options.resize, Some((640, 480)));
    }

    #[test]
    fn test_render() {
        let clips = vec![PathBuf::from("/v/a.mp4"), PathBuf::from("/v/b.mp4")];
        let text = ConcatManifest::new().render(&clips, &StitchOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ffconcat version 1.0",
                "# transitions: on",
                "# resize: 640x480",
                "file '/v/a.mp4'",
                "file '/v/b.mp4'",
            ]
        );
    }

    #[test]
    fn test_render_without_options() {
        let options = StitchOptions {
            transitions: false,
            resize: None,
        };
        let text = ConcatManifest::new().render(&[PathBuf::from("it's.mp4")], &options);
        assert!(text.contains("# transitions: off"));
        assert!(text.contains("# resize: off"));
        assert!(text.contains(r"file 'it'\''s.mp4'"));
    }

    #[test]
    fn test_stitch_writes_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.txt");
        let written = ConcatManifest::new()
            .stitch(&[PathBuf::from("a.mp4")], &StitchOptions::default(), &output)
            .unwrap();
        assert_eq!(written, output);
        let text = fs::read_to_string(&output).unwrap();
        assert!(text.ends_with("file 'a.mp4'\n"));
    }

    #[test]
    fn test_stitch_rejects_empty_list() {
        let dir = TempDir::new().unwrap();
        let result =
            ConcatManifest::new().stitch(&[], &StitchOptions::default(), &dir.path().join("x"));
        assert!(matches!(result, Err(GlossError::NothingToStitch)));
        assert!(!dir.path().join("x").exists());
    }

    #[test]
    fn test_stitch_reports_unwritable_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("missing").join("out.ffconcat");
        let clips = [PathBuf::from("a.mp4")];
        let result = ConcatManifest::new().stitch(&clips, &StitchOptions::default(), &output);
        match result {
            Err(GlossError::Stitch { path, .. }) => assert_eq!(path, output),
            other => panic!("Expected Stitch error, got {other:?}"),
        }
    }
}
