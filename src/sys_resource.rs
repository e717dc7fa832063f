// ----- Imports ----- //

use std::{
    env,
    fs,
    io,
    path::{Path, PathBuf},
};

// ----- Resource Paths ----- //

/// Resolves a resource path. Absolute paths are kept as-is; relative ones are
/// looked up next to the executable first, then in the working directory.
pub fn resolve_path(relative: impl AsRef<Path>) -> PathBuf {
    let relative = relative.as_ref();
    if relative.is_absolute() {
        return relative.to_path_buf();
    }

    if let Some(exe_dir) = exe_dir() {
        let candidate = exe_dir.join(relative);
        if candidate.exists() {
            return candidate;
        }
    }

    relative.to_path_buf()
}

// Read a text resource resolved via `resolve_path`
pub fn read_resource(relative: impl AsRef<Path>) -> io::Result<String> {
    let path = resolve_path(relative);
    let contents = fs::read_to_string(&path)?;
    log::debug!("Loaded resource: {}", path.display());
    Ok(contents)
}

// ----- Helpers ----- //

fn exe_dir() -> Option<PathBuf> {
    let exe_path = env::current_exe().ok()?;
    exe_path.parent().map(Path::to_path_buf)
}

// ----- Tests ----- //
