use {
    anyhow::Result,
    ignore::WalkBuilder,
    std::path::{Path, PathBuf},
    walkdir::WalkDir,
};

pub const VERSION_FILE: &str = ".version";

/// Find all `.version` sidecar files under `root`.
///
/// Hidden files are included (the sidecar itself is one) and gitignore
/// rules are honored, so nothing under build output directories is
/// picked up.
pub fn find_version_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut results = vec![];
    for entry in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .build()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|f| f.to_str()) else {
            continue;
        };
        if file_name != VERSION_FILE {
            continue;
        }
        results.push(path.to_path_buf());
    }
    Ok(results)
}

/// Find all `.nupkg` artifacts under a `<configuration>` output
/// directory (e.g. `KzBsv/bin/Release/KzBsv.0.1.2.nupkg`).
///
/// Build output is usually gitignored, so this walk must not honor
/// ignore rules; only `.git` is skipped.
pub fn find_nupkgs(root: &Path, configuration: &str) -> Result<Vec<PathBuf>> {
    let mut results = vec![];

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !entry.path().components().any(|c| c.as_os_str() == ".git"))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("nupkg") {
            continue;
        }
        if !path.components().any(|c| c.as_os_str() == configuration) {
            continue;
        }
        results.push(path.to_path_buf());
    }

    Ok(results)
}
