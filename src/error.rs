use crate::blender::BlenderError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop the launcher before or while delegating to
/// blender. Failures inside the render itself are not represented here; they
/// come back as the child's exit status and pass through unmodified.
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("unable to locate the render project root; pass --project-root or set {}", crate::project::PROJECT_ROOT_ENV)]
    ProjectRootNotFound,
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),
    #[error("render entry script not found: {0}")]
    EntryScriptNotFound(PathBuf),
    #[error(transparent)]
    Blender(#[from] BlenderError),
    #[error("unable to encode probe output: {0}")]
    ProbeEncode(#[from] serde_json::Error),
}
