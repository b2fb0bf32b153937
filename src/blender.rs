use crate::args::Args;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::{env, io};
use thiserror::Error;
use tracing::{debug, info};

/// Module search variable extended for the embedded interpreter.
pub const PYTHONPATH: &str = "PYTHONPATH";

#[derive(Debug, Error)]
pub enum BlenderError {
    #[error("unable to run blender executable {executable:?}: {source}")]
    ExecutableNotFound {
        executable: PathBuf,
        source: io::Error,
    },
    #[error("unrecognized output from blender -v: {0:?}")]
    VersionUnrecognized(String),
    #[error("unable to extend {PYTHONPATH}: {0}")]
    PythonPath(#[from] env::JoinPathsError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// What `--probe` reports about the resolved installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlenderData {
    pub executable: PathBuf,
    pub version: Version,
}

/// Handle to the blender executable on this machine. The path is not checked
/// until something is actually run against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blender {
    executable: PathBuf,
}

impl Blender {
    pub fn new(executable: impl AsRef<Path>) -> Self {
        Blender {
            executable: executable.as_ref().to_path_buf(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Fetch the installed version by invoking `-v`.
    pub fn probe(&self) -> Result<BlenderData, BlenderError> {
        let output = Command::new(&self.executable)
            .arg("-v")
            .output()
            .map_err(|source| BlenderError::ExecutableNotFound {
                executable: self.executable.clone(),
                source,
            })?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let version = parse_version(&stdout)?;
        Ok(BlenderData {
            executable: self.executable.clone(),
            version,
        })
    }

    /// Run blender with the given argument list, waiting on it with inherited
    /// stdio. `project_root` is prepended to the child's `PYTHONPATH` so the
    /// entry script can import first-party modules; existing entries stay.
    pub fn launch(&self, args: &Args, project_root: &Path) -> Result<ExitStatus, BlenderError> {
        let python_path = extend_python_path(project_root, env::var_os(PYTHONPATH))?;
        let col = args.create_arg_list();

        info!(executable = %self.executable.display(), config = %args.config().display(), "launching blender");
        debug!(?col, "blender argument list");

        let status = Command::new(&self.executable)
            .args(col)
            .env(PYTHONPATH, python_path)
            .status()
            .map_err(|source| BlenderError::ExecutableNotFound {
                executable: self.executable.clone(),
                source,
            })?;

        Ok(status)
    }
}

/// First line of `blender -v` is `Blender <major.minor.patch>`.
fn parse_version(stdout: &str) -> Result<Version, BlenderError> {
    let first = stdout.lines().next().unwrap_or_default();
    first
        .strip_prefix("Blender ")
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|v| Version::parse(v).ok())
        .ok_or_else(|| BlenderError::VersionUnrecognized(first.to_owned()))
}

fn extend_python_path(
    project_root: &Path,
    existing: Option<std::ffi::OsString>,
) -> Result<std::ffi::OsString, BlenderError> {
    let mut paths = vec![project_root.to_path_buf()];
    if let Some(existing) = existing {
        paths.extend(env::split_paths(&existing));
    }
    Ok(env::join_paths(paths)?)
}
