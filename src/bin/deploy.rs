use {
    anyhow::Result,
    clap::{Args, Parser, Subcommand},
    log::error,
};

#[derive(Parser)]
#[command(name = "deploy", about = "Build and publish packages", version)]
struct Deploy {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Export versions, build, and push packages")]
    Deploy(deploy::commands::deploy::CommandArgs),
    #[command(about = "Run the release build")]
    Build(deploy::commands::build::CommandArgs),
    #[command(about = "Push built packages to the registry")]
    Push(deploy::commands::push::CommandArgs),
    #[command(about = "Show project versions")]
    Versions(deploy::commands::versions::CommandArgs),
}

#[derive(Args, Debug)]
pub struct GlobalOptions {
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        error!("Error: {err}");
        for (i, cause) in err.chain().skip(1).enumerate() {
            error!("  {}: {}", i.saturating_add(1), cause);
        }
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    let cli = Deploy::parse();

    if cli.global.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    match cli.command {
        Commands::Deploy(args) => {
            deploy::commands::deploy::run(args)?;
        }
        Commands::Build(args) => {
            deploy::commands::build::run(args)?;
        }
        Commands::Push(args) => {
            deploy::commands::push::run(args)?;
        }
        Commands::Versions(args) => {
            deploy::commands::versions::run(args)?;
        }
    }

    Ok(())
}
