//! Pipeline error taxonomy.
//!
//! Every build-phase error is fatal: the whole build aborts rather than
//! producing a half-configured image. There is no retry anywhere in this
//! pipeline. A failure of the wrapped service itself is not represented
//! here; the launcher forwards the child's exit code unchanged instead of
//! decoding it.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to fetch service dependencies: {detail}")]
    DependencyFetch { detail: String },

    #[error("shared config template not found at {path}")]
    MissingTemplate { path: PathBuf },

    #[error("failed to write private config to {path}")]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("private config not found at {path}; run 'corkbuild build' first")]
    ConfigNotFound { path: PathBuf },
}
