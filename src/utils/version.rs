use {
    anyhow::{Context, Result},
    log::{debug, info, warn},
    semver::Version,
    serde::Serialize,
    std::{env, fs, path::Path},
};

pub use super::fs::VERSION_FILE;

const VERSION_VAR_SUFFIX: &str = "_PACKAGE_VERSION";

/// A project together with the version read from its sidecar file and
/// the environment variable it is exposed through.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectVersion {
    pub project: String,
    pub version: String,
    pub variable: String,
}

/// Environment variable name carrying a project's package version.
/// Dots in the project name are not valid in variable names and become
/// underscores: `Tests.KzBsv` -> `Tests_KzBsv_PACKAGE_VERSION`.
pub fn package_version_var(project: &str) -> String {
    format!("{}{VERSION_VAR_SUFFIX}", project.replace('.', "_"))
}

/// First line of a `.version` sidecar, trimmed of whitespace.
pub fn read_version_file(path: &Path) -> Result<String> {
    let content =
        fs::read_to_string(path).context(format!("failed to read {}", path.display()))?;
    Ok(content.lines().next().unwrap_or_default().trim().to_string())
}

/// Read the sidecar of every listed project, without touching the
/// environment. Projects without a sidecar are skipped.
pub fn collect_versions(root: &Path, projects: &[String]) -> Result<Vec<ProjectVersion>> {
    let mut versions = vec![];
    for project in projects {
        let sidecar = root.join(project).join(VERSION_FILE);
        if !sidecar.exists() {
            debug!("no {VERSION_FILE} for {project}, skipping");
            continue;
        }
        let version = read_version_file(&sidecar)?;
        if Version::parse(&version).is_err() {
            warn!(
                "{} does not contain a semver version: {version:?}",
                sidecar.display()
            );
        }
        versions.push(ProjectVersion {
            project: project.clone(),
            version,
            variable: package_version_var(project),
        });
    }
    Ok(versions)
}

/// Read the sidecars and set the version variables in this process, so
/// build subprocesses inherit them.
pub fn export_versions(root: &Path, projects: &[String]) -> Result<Vec<ProjectVersion>> {
    let versions = collect_versions(root, projects)?;
    for pv in &versions {
        env::set_var(&pv.variable, &pv.version);
        info!("exported {}={}", pv.variable, pv.version);
    }
    Ok(versions)
}

/// Derive the project list from the `.version` files present under
/// `root`. The project name is the sidecar's directory, relative to
/// the root; a sidecar at the root itself has no project name and is
/// ignored.
pub fn discover_projects(root: &Path) -> Result<Vec<String>> {
    let sidecars = super::fs::find_version_files(root)?;
    let mut projects = vec![];
    for sidecar in sidecars {
        let Some(dir) = sidecar.parent() else {
            continue;
        };
        let Ok(relative) = dir.strip_prefix(root) else {
            continue;
        };
        if relative.as_os_str().is_empty() {
            continue;
        }
        projects.push(relative.to_string_lossy().replace('\\', "/"));
    }
    projects.sort();
    Ok(projects)
}
