use {
    crate::types::{StepOutcome, StepStatus},
    anyhow::{Context, Result},
    clap::Args,
    log::{info, warn},
    std::{
        env,
        path::{Path, PathBuf},
    },
};

pub const NUGET_KEY_VAR: &str = "NUGET_KEY";

#[derive(Args)]
pub struct CommandArgs {
    #[arg(short, long, help = "Build configuration (defaults to Release)")]
    pub configuration: Option<String>,

    #[arg(short, long, help = "Registry source URL")]
    pub source: Option<String>,
}

pub fn run(args: CommandArgs) -> Result<()> {
    let root = crate::utils::get_repo_root().context("failed to locate the repository root")?;
    let config = crate::config::load(&root).context("failed to load deploy.toml")?;

    let configuration = args.configuration.unwrap_or(config.configuration);
    let source = args.source.unwrap_or(config.source);

    let (outcome, _artifacts) = push_packages(&root, &configuration, &source);
    info!("push step finished: {:?}", outcome.status);

    // a failed push is reported but never fails the command
    Ok(())
}

/// Push every `.nupkg` under a `<configuration>` output directory.
///
/// This step is strictly best-effort: a missing API key skips it and
/// any push failure is logged and swallowed, so the caller always
/// proceeds as if it succeeded.
pub fn push_packages(
    root: &Path,
    configuration: &str,
    source: &str,
) -> (StepOutcome, Vec<PathBuf>) {
    let key = match env::var(NUGET_KEY_VAR) {
        Ok(key) if !key.is_empty() => key,
        _ => {
            warn!("{NUGET_KEY_VAR} is not set, skipping the package push");
            return (
                StepOutcome::with_detail(
                    "push",
                    StepStatus::Skipped,
                    format!("{NUGET_KEY_VAR} is not set"),
                ),
                vec![],
            );
        }
    };

    let artifacts = match crate::utils::find_nupkgs(root, configuration) {
        Ok(artifacts) => artifacts,
        Err(err) => {
            warn!("failed to enumerate .nupkg artifacts: {err:#}");
            vec![]
        }
    };
    if artifacts.is_empty() {
        warn!("no .nupkg artifacts found under {configuration} output directories");
    } else {
        info!("found {} package(s) to push", artifacts.len());
    }

    let pattern = format!("*/**/{configuration}/*.nupkg");
    match crate::utils::dotnet::nuget_push(root, &pattern, &key, source) {
        Ok(()) => (StepOutcome::new("push", StepStatus::Succeeded), artifacts),
        Err(err) => {
            warn!("package push failed, continuing anyway: {err:#}");
            (
                StepOutcome::with_detail("push", StepStatus::FailedIgnored, format!("{err:#}")),
                artifacts,
            )
        }
    }
}
