use crate::config::BuildConfig;
use anyhow::Context;

/// Build the algorithm binary with the configured build tool.
///
/// The tool's output is inherited so build progress stays visible on the terminal. A failed
/// build aborts the sweep before anything is executed.
pub fn build_algorithm(config: &BuildConfig, algorithm: &str) -> anyhow::Result<()> {
    let program = which::which(&config.program)
        .with_context(|| format!("Build tool `{}` not found on PATH", config.program))?;

    let target = config.target(algorithm);
    log::info!("Building {target}");

    let mut build_cmd = std::process::Command::new(program);
    build_cmd
        .current_dir(&config.workdir)
        .args(&config.args)
        .arg(&target);

    if !build_cmd
        .status()
        .with_context(|| format!("Failed to run `{}`", config.program))?
        .success()
    {
        anyhow::bail!("`{}` build command failed for target {}", config.program, target);
    }

    Ok(())
}
