use indicatif::{ProgressBar, ProgressStyle};

/// Displays a progress bar over the graph corpus while the sweep is running.
pub fn sweep_progress(graph_count: u64) -> ProgressBar {
    let pb = ProgressBar::new(graph_count);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            .expect("Failed to set progress style")
            .progress_chars("#>-"),
    );
    pb
}
