use crate::cue::error::CueResult;
use async_recursion::async_recursion;
use std::path::{Path, PathBuf};
use tokio::fs;

const CUE_EXTENSION: &str = "cue";

#[async_recursion]
pub async fn get_all_files(dir_path: &Path, recursive: bool) -> CueResult<Vec<PathBuf>> {
    let mut dir = fs::read_dir(dir_path).await?;
    let mut files = Vec::new();

    while let Some(entry) = dir.next_entry().await? {
        let path = entry.path();

        if path.is_dir() {
            if recursive {
                files.append(&mut get_all_files(&path, recursive).await?);
            }
        } else {
            files.push(path);
        }
    }

    Ok(files)
}

pub fn is_cue_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CUE_EXTENSION))
}

/// Expands directories into their `.cue` files; other paths are passed through.
pub async fn collect_cue_files(paths: &[PathBuf], recursive: bool) -> CueResult<Vec<PathBuf>> {
    let mut cue_files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = get_all_files(path, recursive)
                .await?
                .into_iter()
                .filter(|file| is_cue_file(file))
                .collect();
            found.sort();
            cue_files.append(&mut found);
        } else {
            cue_files.push(path.clone());
        }
    }

    Ok(cue_files)
}
