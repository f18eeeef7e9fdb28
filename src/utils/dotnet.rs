use {
    anyhow::{anyhow, Context, Result},
    log::{debug, info},
    std::{io::Write, path::Path, process::Command},
};

pub fn check_dotnet_available() -> Result<()> {
    let output = Command::new("dotnet")
        .args(["--version"])
        .output()
        .map_err(|e| anyhow!("Failed to run dotnet command: {e}"))?;

    if !output.status.success() {
        return Err(anyhow!(
            "Failed to run dotnet command: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(())
}

/// Run `dotnet build -c <configuration>` in `root`.
///
/// The build writes its diagnostics to stdout, which is passed through.
/// Anything captured on stderr is fatal, regardless of the exit status;
/// the exit code alone is not a reliable failure signal here.
pub fn build(root: &Path, configuration: &str) -> Result<()> {
    info!(
        "running `dotnet build -c {configuration}` in {}",
        root.display()
    );
    let output = Command::new("dotnet")
        .args(["build", "-c", configuration])
        .current_dir(root)
        .output()
        .context("failed to run `dotnet build`")?;

    pass_through_stdout(&output.stdout);

    if !output.stderr.is_empty() {
        return Err(anyhow!(
            "`dotnet build` wrote to stderr:\n{}",
            String::from_utf8_lossy(&output.stderr).trim_end()
        ));
    }
    Ok(())
}

/// Run `dotnet test` in `root`, with the same stderr-is-fatal rule as
/// [`build`].
pub fn test(root: &Path) -> Result<()> {
    info!("running `dotnet test` in {}", root.display());
    let output = Command::new("dotnet")
        .args(["test"])
        .current_dir(root)
        .output()
        .context("failed to run `dotnet test`")?;

    pass_through_stdout(&output.stdout);

    if !output.stderr.is_empty() {
        return Err(anyhow!(
            "`dotnet test` wrote to stderr:\n{}",
            String::from_utf8_lossy(&output.stderr).trim_end()
        ));
    }
    Ok(())
}

/// Run `dotnet nuget push` for every package matching `pattern`.
///
/// The glob is expanded by the registry client itself, not by this
/// process. The API key is never logged.
pub fn nuget_push(root: &Path, pattern: &str, key: &str, source: &str) -> Result<()> {
    debug!(
        "running `dotnet nuget push {pattern} --skip-duplicate -s {source}` in {}",
        root.display()
    );
    let output = Command::new("dotnet")
        .args([
            "nuget",
            "push",
            pattern,
            "--skip-duplicate",
            "-k",
            key,
            "-s",
            source,
        ])
        .current_dir(root)
        .output()
        .context("failed to run `dotnet nuget push`")?;

    pass_through_stdout(&output.stdout);

    if !output.status.success() {
        return Err(anyhow!(
            "`dotnet nuget push` exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim_end()
        ));
    }
    Ok(())
}

fn pass_through_stdout(bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(bytes);
    let _ = stdout.flush();
}
