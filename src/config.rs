use {
    anyhow::{Context, Result},
    log::debug,
    std::{fs, path::Path},
    toml_edit::Document,
};

pub const CONFIG_FILE: &str = "deploy.toml";
pub const DEFAULT_CONFIGURATION: &str = "Release";
pub const DEFAULT_SOURCE: &str = "https://api.nuget.org/v3/index.json";

/// Settings read from the optional `deploy.toml` at the repository
/// root.
///
/// ```toml
/// [deploy]
/// projects = ["KzBsv"]
/// configuration = "Release"
/// source = "https://api.nuget.org/v3/index.json"
/// ```
#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub projects: Vec<String>,
    pub configuration: String,
    pub source: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            projects: vec![],
            configuration: DEFAULT_CONFIGURATION.to_string(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}

pub fn load(root: &Path) -> Result<DeployConfig> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        debug!("no {CONFIG_FILE} in {}, using defaults", root.display());
        return Ok(DeployConfig::default());
    }

    let content =
        fs::read_to_string(&path).context(format!("failed to read {}", path.display()))?;
    let doc = content
        .parse::<Document<String>>()
        .context(format!("failed to parse {}", path.display()))?;

    let mut config = DeployConfig::default();
    let Some(deploy) = doc.get("deploy") else {
        return Ok(config);
    };

    if let Some(projects) = deploy.get("projects").and_then(|p| p.as_array()) {
        config.projects = projects
            .iter()
            .filter_map(|p| p.as_str())
            .map(str::to_string)
            .collect();
    }
    if let Some(configuration) = deploy.get("configuration").and_then(|c| c.as_str()) {
        config.configuration = configuration.to_string();
    }
    if let Some(source) = deploy.get("source").and_then(|s| s.as_str()) {
        config.source = source.to_string();
    }

    Ok(config)
}

/// Project list precedence: `--project` flags, then `deploy.toml`,
/// then whatever directories under the root carry a `.version` file.
pub fn resolve_projects(
    root: &Path,
    cli_projects: &[String],
    config: &DeployConfig,
) -> Result<Vec<String>> {
    if !cli_projects.is_empty() {
        return Ok(cli_projects.to_vec());
    }
    if !config.projects.is_empty() {
        return Ok(config.projects.clone());
    }
    crate::utils::version::discover_projects(root)
}
