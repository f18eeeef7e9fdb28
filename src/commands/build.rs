use {
    anyhow::{Context, Result},
    clap::Args,
    log::info,
};

#[derive(Args)]
pub struct CommandArgs {
    #[arg(
        short,
        long = "project",
        help = "Project directory carrying a .version file; may be repeated"
    )]
    pub projects: Vec<String>,

    #[arg(short, long, help = "Build configuration (defaults to Release)")]
    pub configuration: Option<String>,
}

pub fn run(args: CommandArgs) -> Result<()> {
    let root = crate::utils::get_repo_root().context("failed to locate the repository root")?;
    let config = crate::config::load(&root).context("failed to load deploy.toml")?;
    let projects = crate::config::resolve_projects(&root, &args.projects, &config)
        .context("failed to resolve the project list")?;

    let versions = crate::utils::export_versions(&root, &projects)
        .context("failed to export project versions")?;
    info!("exported {} project version(s)", versions.len());

    crate::utils::check_dotnet_available().context("dotnet is not available")?;

    let configuration = args.configuration.unwrap_or(config.configuration);
    crate::utils::dotnet::build(&root, &configuration).context("release build failed")?;

    Ok(())
}
