use std::path::{Path, PathBuf};

const CANDIDATES: [&str; 2] = ["data/licenses.json", "licenses.json"];

/// Picks the file to import: the explicit path when given, else the first default found under `base`.
pub fn locate_license_file(explicit: Option<PathBuf>, base: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path);
    }
    CANDIDATES
        .iter()
        .map(|candidate| base.join(candidate))
        .find(|path| path.is_file())
}

/// True when both paths name the same existing file, however they are spelled.
pub fn is_store_file(source: &Path, store: &Path) -> bool {
    match (source.canonicalize(), store.canonicalize()) {
        (Ok(source), Ok(store)) => source == store,
        _ => false,
    }
}
