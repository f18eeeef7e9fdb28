use {
    anyhow::{anyhow, Result},
    log::debug,
    std::{env, path::PathBuf, process::Command},
};

/// Root directory of the repository.
///
/// Uses `git rev-parse --show-toplevel` when inside a git checkout and
/// falls back to the current directory otherwise, so the helper also
/// works from a source tarball.
pub fn get_repo_root() -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output();
    if let Ok(output) = output {
        if output.status.success() {
            let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
            return Ok(PathBuf::from(root));
        }
    }
    let cwd =
        env::current_dir().map_err(|e| anyhow!("failed to get current directory, error: {e}"))?;
    debug!("not inside a git repository, using {}", cwd.display());
    Ok(cwd)
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq, serial_test::serial, std::fs};

    #[test]
    #[serial]
    fn test_get_repo_root_in_git_checkout() {
        let prev_dir = env::current_dir().unwrap();
        scopeguard::defer! {
            let _ = env::set_current_dir(prev_dir);
        }

        let temp_dir = tempfile::tempdir().unwrap();
        env::set_current_dir(temp_dir.path()).unwrap();
        Command::new("git").args(["init"]).output().unwrap();

        let root_path = get_repo_root().unwrap();

        let canonicalized_root_path = fs::canonicalize(root_path).unwrap();
        let canonicalized_temp_dir_path = fs::canonicalize(temp_dir.path()).unwrap();

        assert_eq!(canonicalized_root_path, canonicalized_temp_dir_path);
    }

    #[test]
    #[serial]
    fn test_get_repo_root_falls_back_to_cwd() {
        let prev_dir = env::current_dir().unwrap();
        scopeguard::defer! {
            let _ = env::set_current_dir(prev_dir);
        }

        let temp_dir = tempfile::tempdir().unwrap();
        env::set_current_dir(temp_dir.path()).unwrap();

        let root_path = get_repo_root().unwrap();

        let canonicalized_root_path = fs::canonicalize(root_path).unwrap();
        let canonicalized_temp_dir_path = fs::canonicalize(temp_dir.path()).unwrap();

        assert_eq!(canonicalized_root_path, canonicalized_temp_dir_path);
    }
}
