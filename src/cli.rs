use crate::args::{Args, Mode};
use crate::blender::Blender;
use crate::error::LauncherError;
use crate::project;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "rgbd-launcher",
    version,
    about = "Run the RGBD sequence renderer through headless blender"
)]
pub struct Cli {
    /// Scene config TOML; defaults to config/scene_example.toml under the project root
    pub config: Option<PathBuf>,

    /// Blender executable to invoke
    #[arg(long, env = "BLENDER_BIN", default_value = "blender")]
    pub blender: PathBuf,

    /// Render project root; located automatically when omitted
    #[arg(long, env = project::PROJECT_ROOT_ENV)]
    pub project_root: Option<PathBuf>,

    /// Keep the blender UI up instead of rendering headless
    #[arg(long)]
    pub gui: bool,

    /// Print the resolved blender executable and version as JSON, then exit
    #[arg(long)]
    pub probe: bool,
}

/// Resolve everything, hand off to blender, and return the exit code the
/// launcher should finish with.
pub fn run(cli: Cli) -> Result<i32, LauncherError> {
    let blender = Blender::new(&cli.blender);

    if cli.probe {
        let data = blender.probe()?;
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(0);
    }

    let root = project::resolve_root(cli.project_root)?;
    let config = project::resolve_config(&root, cli.config)?;
    let entry = project::resolve_entry(&root)?;

    let mode = if cli.gui { Mode::Gui } else { Mode::Background };
    let args = Args::new(entry, config, mode);

    let status = blender.launch(&args, &root)?;
    Ok(exit_code(status))
}

// Shell convention for signal deaths so callers still see a nonzero status.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_to_blender_on_path() {
        let cli = Cli::parse_from(["rgbd-launcher"]);
        assert_eq!(cli.blender, PathBuf::from("blender"));
        assert!(cli.config.is_none());
        assert!(!cli.gui);
    }

    #[test]
    fn positional_config_is_captured() {
        let cli = Cli::parse_from(["rgbd-launcher", "config/scene_two_cubes.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("config/scene_two_cubes.toml")));
    }
}
