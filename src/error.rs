//! Crate-level error types.
//!
//! Camera updates never fail: out-of-range input is clamped. Errors come
//! only from reading and writing option presets and from bringing up the
//! viewer window.

use std::fmt;
use std::path::{Path, PathBuf};

/// Errors produced by the flycam crate.
#[derive(Debug)]
pub enum FlycamError {
    /// A preset file (or its directory) could not be read or written.
    PresetIo {
        /// File or directory being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// A preset is not valid TOML for [`Options`](crate::Options), or the
    /// options could not be serialized.
    PresetFormat(String),
    /// The viewer window or its event loop could not be created.
    Viewer(String),
}

impl FlycamError {
    pub(crate) fn preset_io(path: &Path, source: std::io::Error) -> Self {
        Self::PresetIo {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for FlycamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PresetIo { path, source } => {
                write!(f, "cannot access preset {}: {source}", path.display())
            }
            Self::PresetFormat(msg) => write!(f, "invalid camera preset: {msg}"),
            Self::Viewer(msg) => write!(f, "cannot start viewer: {msg}"),
        }
    }
}

impl std::error::Error for FlycamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PresetIo { source, .. } => Some(source),
            Self::PresetFormat(_) | Self::Viewer(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;

    use super::*;

    #[test]
    fn io_errors_keep_path_and_source() {
        let err = FlycamError::preset_io(
            Path::new("presets/fast.toml"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "cannot access preset presets/fast.toml: denied"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn format_errors_have_no_source() {
        let err = FlycamError::PresetFormat("expected `]`".into());
        assert_eq!(err.to_string(), "invalid camera preset: expected `]`");
        assert!(err.source().is_none());
    }
}
