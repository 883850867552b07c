// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{PlaylistError, Result};

/// Final output path for a document.
/// - no `-o`            → `./<suggested>`
/// - `-o` is a dir/hint → `<dir>/<suggested>` (dir created)
/// - otherwise          → the given path as-is (parent created)
pub fn resolve_out_path(user_out: Option<&Path>, suggested: &str) -> Result<PathBuf> {
    let Some(p) = user_out.filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(PathBuf::from(suggested));
    };
    let p = PathBuf::from(normalize_separators(&p.to_string_lossy()));

    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(suggested))
    } else {
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(PlaylistError::InvalidInput(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// First free "<stem>.ext", "<stem> (2).ext", "<stem> (3).ext", …
pub fn dedupe_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }
    let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let ext = path.extension().map(|e| e.to_string_lossy().into_owned());

    (2usize..)
        .map(|n| {
            let name = match &ext {
                Some(ext) => format!("{stem} ({n}).{ext}"),
                None => format!("{stem} ({n})"),
            };
            dir.join(name)
        })
        .find(|p| !p.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

/// Write the finished document (UTF-8, exactly as rendered).
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}
