use crate::error::LauncherError;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Entry script the launcher hands to blender, relative to the project root.
pub const ENTRY_SCRIPT: &str = "src/blender_rgbd_render_seq.py";

/// Config used when no positional argument is given, relative to the project root.
pub const DEFAULT_CONFIG: &str = "config/scene_example.toml";

/// Environment override for the project root.
pub const PROJECT_ROOT_ENV: &str = "RGBD_PROJECT_ROOT";

/// Resolve the render project root. An explicit path (flag or env, handled by
/// the CLI layer) wins; otherwise walk up from the launcher binary's own
/// directory until a directory containing the entry script is found, so the
/// result does not depend on the caller's working directory.
pub fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf, LauncherError> {
    if let Some(root) = explicit {
        return Ok(root);
    }

    let exe = env::current_exe().map_err(|_| LauncherError::ProjectRootNotFound)?;
    let mut dir = exe.parent();
    while let Some(candidate) = dir {
        if candidate.join(ENTRY_SCRIPT).is_file() {
            debug!(root = %candidate.display(), "project root located");
            return Ok(candidate.to_path_buf());
        }
        dir = candidate.parent();
    }

    Err(LauncherError::ProjectRootNotFound)
}

/// Default the config under the root, or take the caller's path verbatim.
/// Either way it must point at an existing file before blender is started.
pub fn resolve_config(
    root: &Path,
    explicit: Option<PathBuf>,
) -> Result<PathBuf, LauncherError> {
    let config = explicit.unwrap_or_else(|| root.join(DEFAULT_CONFIG));
    if !config.is_file() {
        return Err(LauncherError::ConfigNotFound(config));
    }
    Ok(config)
}

/// Locate the entry script under the root, failing fast if the checkout is
/// incomplete rather than letting blender report a confusing script error.
pub fn resolve_entry(root: &Path) -> Result<PathBuf, LauncherError> {
    let entry = root.join(ENTRY_SCRIPT);
    if !entry.is_file() {
        return Err(LauncherError::EntryScriptNotFound(entry));
    }
    Ok(entry)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    fn scratch_project(tag: &str) -> PathBuf {
        let root = env::temp_dir().join(format!("rgbd-launcher-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("config")).unwrap();
        fs::write(root.join(ENTRY_SCRIPT), "# entry\n").unwrap();
        root
    }

    #[test]
    fn explicit_root_wins() {
        let root = resolve_root(Some(PathBuf::from("/somewhere/project"))).unwrap();
        assert_eq!(root, PathBuf::from("/somewhere/project"));
    }

    #[test]
    fn default_config_resolves_under_root() {
        let root = scratch_project("default-config");
        fs::write(root.join(DEFAULT_CONFIG), "[render]\n").unwrap();

        let config = resolve_config(&root, None).unwrap();
        assert_eq!(config, root.join(DEFAULT_CONFIG));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn explicit_config_taken_verbatim() {
        let root = scratch_project("explicit-config");
        let custom = root.join("config").join("other.toml");
        fs::write(&custom, "[render]\n").unwrap();

        let config = resolve_config(&root, Some(custom.clone())).unwrap();
        assert_eq!(config, custom);

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn missing_config_is_fatal() {
        let root = scratch_project("missing-config");

        let err = resolve_config(&root, None).unwrap_err();
        match err {
            LauncherError::ConfigNotFound(path) => assert_eq!(path, root.join(DEFAULT_CONFIG)),
            other => panic!("unexpected error: {other}"),
        }

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn entry_script_located_or_fatal() {
        let root = scratch_project("entry");
        assert_eq!(resolve_entry(&root).unwrap(), root.join(ENTRY_SCRIPT));

        fs::remove_file(root.join(ENTRY_SCRIPT)).unwrap();
        assert!(matches!(
            resolve_entry(&root),
            Err(LauncherError::EntryScriptNotFound(_))
        ));

        fs::remove_dir_all(&root).unwrap();
    }
}
