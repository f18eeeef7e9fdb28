use {
    anyhow::{Context, Result},
    clap::Args,
};

#[derive(Args)]
pub struct CommandArgs {
    #[arg(
        short,
        long = "project",
        help = "Project directory carrying a .version file; may be repeated"
    )]
    pub projects: Vec<String>,

    #[arg(long, help = "Also set the variables in this process environment")]
    pub export: bool,
}

pub fn run(args: CommandArgs) -> Result<()> {
    let root = crate::utils::get_repo_root().context("failed to locate the repository root")?;
    let config = crate::config::load(&root).context("failed to load deploy.toml")?;
    let projects = crate::config::resolve_projects(&root, &args.projects, &config)
        .context("failed to resolve the project list")?;

    let versions = if args.export {
        crate::utils::export_versions(&root, &projects)?
    } else {
        crate::utils::collect_versions(&root, &projects)?
    };

    for pv in &versions {
        println!("{}={}", pv.variable, pv.version);
    }

    Ok(())
}
