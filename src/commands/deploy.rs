use {
    crate::types::{DeploySummary, StepStatus},
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

    #[arg(short, long, help = "Registry source URL")]
    pub source: Option<String>,

    #[arg(long, help = "Run `dotnet test` between build and push")]
    pub with_tests: bool,

    #[arg(long, help = "Stop before pushing packages")]
    pub dry_run: bool,

    #[arg(long, help = "Print a JSON summary of the pipeline")]
    pub json: bool,
}

pub fn run(args: CommandArgs) -> Result<()> {
    let root = crate::utils::get_repo_root().context("failed to locate the repository root")?;
    let config = crate::config::load(&root).context("failed to load deploy.toml")?;
    let projects = crate::config::resolve_projects(&root, &args.projects, &config)
        .context("failed to resolve the project list")?;
    let configuration = args
        .configuration
        .unwrap_or_else(|| config.configuration.clone());
    let source = args.source.unwrap_or_else(|| config.source.clone());

    let versions = crate::utils::export_versions(&root, &projects)
        .context("failed to export project versions")?;
    info!("exported {} project version(s)", versions.len());

    let mut summary = DeploySummary {
        versions,
        ..DeploySummary::default()
    };
    summary.record("versions", StepStatus::Succeeded);

    crate::utils::check_dotnet_available().context("dotnet is not available")?;

    crate::utils::dotnet::build(&root, &configuration).context("release build failed")?;
    summary.record("build", StepStatus::Succeeded);

    if args.with_tests {
        crate::utils::dotnet::test(&root).context("tests failed")?;
        summary.record("test", StepStatus::Succeeded);
    } else {
        summary.record("test", StepStatus::Skipped);
    }

    if args.dry_run {
        info!("dry run, skipping the package push");
        summary.record("push", StepStatus::Skipped);
    } else {
        let (outcome, artifacts) = super::push::push_packages(&root, &configuration, &source);
        summary.steps.push(outcome);
        summary.artifacts = artifacts;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
