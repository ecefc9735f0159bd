//! Frame description files (JSON, TOML, YAML).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{Frame, WorldIndex};
use crate::{FrameError, Result};

/// Largest `size` a frame file may declare.
pub const MAX_FRAME_SIZE: usize = 1 << 20;

/// Supported frame file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    Json,
    Toml,
    Yaml,
}

impl FrameFormat {
    /// Pick a format from a file extension (case-insensitive)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        }
    }
}

/// On-disk shape of a frame
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameDocument {
    /// Display name; the file stem is used when omitted.
    #[serde(default)]
    pub name: Option<String>,
    /// Number of world slots.
    pub size: usize,
    /// Slots that are holes.
    #[serde(default)]
    pub absent: Vec<WorldIndex>,
    /// `[from, to]` pairs, added in order.
    #[serde(default)]
    pub edges: Vec<(WorldIndex, WorldIndex)>,
}

impl FrameDocument {
    /// Parse a document from text in the given format
    pub fn parse(content: &str, format: FrameFormat) -> Result<Self> {
        let parsed: std::result::Result<Self, String> = match format {
            FrameFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            FrameFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            FrameFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|e| FrameError::Parse(format!("{} frame: {}", format.name(), e)))
    }

    /// Build the frame, rejecting indices outside `[0, size)` and sizes
    /// above [`MAX_FRAME_SIZE`].
    pub fn to_frame(&self) -> Result<Frame> {
        if self.size > MAX_FRAME_SIZE {
            return Err(FrameError::InvalidInput(format!(
                "frame size {} exceeds the limit of {} worlds",
                self.size, MAX_FRAME_SIZE
            )));
        }
        let mut frame = Frame::from_edges(self.size, self.edges.iter().copied())?;
        for &world in &self.absent {
            frame.remove_world(world)?;
        }
        Ok(frame)
    }
}

/// A frame read from disk
#[derive(Debug, Clone)]
pub struct LoadedFrame {
    pub name: String,
    pub path: PathBuf,
    pub frame: Frame,
}

/// Read, parse and build the frame stored at `path`.
pub fn load_frame(path: &Path) -> Result<LoadedFrame> {
    let format = FrameFormat::from_path(path).ok_or_else(|| {
        FrameError::Parse(format!(
            "unsupported frame file extension: {}",
            path.display()
        ))
    })?;

    let content = std::fs::read_to_string(path)?;
    let document = FrameDocument::parse(&content, format).map_err(|e| with_path(e, path))?;
    let frame = document.to_frame().map_err(|e| with_path(e, path))?;

    let name = document.name.clone().unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string())
    });

    log::debug!(
        "Loaded frame '{}' from {} ({} slots, {} edges)",
        name,
        path.display(),
        frame.len(),
        frame.edge_count()
    );

    Ok(LoadedFrame {
        name,
        path: path.to_path_buf(),
        frame,
    })
}

/// Prefix a parse or validation message with the file it came from.
fn with_path(err: FrameError, path: &Path) -> FrameError {
    match err {
        FrameError::Parse(msg) => FrameError::Parse(format!("{}: {}", path.display(), msg)),
        FrameError::InvalidInput(msg) => {
            FrameError::InvalidInput(format!("{}: {}", path.display(), msg))
        }
        other => other,
    }
}
