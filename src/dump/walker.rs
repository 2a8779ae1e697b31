use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppResult;

pub fn icc_files(dir: &Path) -> AppResult<impl Iterator<Item = AppResult<PathBuf>>> {
    let entries = fs::read_dir(dir)?;

    Ok(entries.filter_map(|entry| match entry {
        Ok(entry) => icc_candidate(entry.path()),
        Err(err) => Some(Err(err.into())),
    }))
}

fn icc_candidate(path: PathBuf) -> Option<AppResult<PathBuf>> {
    if !has_icc_extension(&path) {
        return None;
    }

    match fs::metadata(&path) {
        Ok(metadata) if metadata.is_file() => Some(Ok(path)),
        Ok(_) => None,
        Err(err) => Some(Err(err.into())),
    }
}

fn has_icc_extension(path: &Path) -> bool {
    path.extension().is_some_and(|extension| extension == "icc")
}

pub fn json_output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".json");

    output_dir.join(name)
}
