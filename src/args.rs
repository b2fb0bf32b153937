use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Whether blender runs headless or with its UI up.
///
/// The render entry point behaves the same either way; GUI mode exists for
/// watching a scene while debugging camera placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Background,
    Gui,
}

// ref: https://docs.blender.org/manual/en/latest/advanced/command_line/arguments.html
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Args {
    entry: PathBuf,  // absolute path to the python entry script
    config: PathBuf, // forwarded verbatim after the "--" separator
    mode: Mode,
}

impl Args {
    pub fn new(entry: impl AsRef<Path>, config: impl AsRef<Path>, mode: Mode) -> Self {
        Args {
            entry: entry.as_ref().to_path_buf(),
            config: config.as_ref().to_path_buf(),
            mode,
        }
    }

    pub fn config(&self) -> &Path {
        &self.config
    }

    /// Build the blender invocation in the order blender requires:
    /// mode flag first, then the script, then script arguments after "--".
    pub fn create_arg_list(&self) -> Vec<OsString> {
        let mut col: Vec<OsString> = Vec::new();

        if self.mode == Mode::Background {
            col.push("--background".into());
        }

        col.push("--python".into());
        col.push(self.entry.clone().into_os_string());

        // everything after "--" belongs to the entry script, not blender
        col.push("--".into());
        col.push("--config".into());
        col.push(self.config.clone().into_os_string());

        col
    }
}
