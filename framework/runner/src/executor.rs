use anyhow::Context;
use std::path::Path;
use std::process::Command;

/// Run one benchmark process to completion and capture its stdout.
///
/// Executions are strictly sequential; the harness never overlaps two benchmark processes
/// because they would contend for CPU and cache and skew the timings. There is no timeout: a
/// hung binary hangs the sweep, which is acceptable for an interactively operated harness.
pub fn execute_capture(
    workdir: &Path,
    binary: &str,
    args: &[String],
    graph_path: &Path,
) -> anyhow::Result<String> {
    log::debug!(
        "{} {} {}",
        binary,
        args.join(" "),
        graph_path.display()
    );

    let output = Command::new(binary)
        .current_dir(workdir)
        .args(args)
        .arg(graph_path)
        .output()
        .with_context(|| format!("Failed to execute benchmark binary `{binary}`"))?;

    // The exit status is not inspected beyond logging; whatever was printed is still parsed.
    if !output.status.success() {
        log::warn!("Benchmark binary exited with {}", output.status);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        log::debug!("Benchmark stderr: {}", stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
