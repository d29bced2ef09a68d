//! Progress bar display for generate runs

use indicatif::{ProgressBar, ProgressStyle};

/// Progress over the dependencies of one run, with the last copied file as message
pub struct ProgressDisplay {
    dependency_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total dependency count
    pub fn new(total_dependencies: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let dependency_pb = ProgressBar::new(total_dependencies);
        dependency_pb.set_style(style);

        Self { dependency_pb }
    }

    /// Display that draws nothing
    #[cfg(test)]
    pub fn hidden(total_dependencies: u64) -> Self {
        let display = Self::new(total_dependencies);
        display
            .dependency_pb
            .set_draw_target(indicatif::ProgressDrawTarget::hidden());
        display
    }

    /// Update to show current dependency being folded in
    pub fn update_dependency(&self, name: &str, current: usize, total: usize) {
        self.dependency_pb
            .set_message(format!("({current}/{total}) {name}"));
    }

    pub fn inc_dependency(&self) {
        self.dependency_pb.inc(1);
    }

    /// Show the file just copied
    pub fn update_file(&self, file_path: &str) {
        // Truncate long paths for display
        let display_path = if file_path.chars().count() > 50 {
            let tail: String = file_path
                .chars()
                .rev()
                .take(47)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("...{tail}")
        } else {
            file_path.to_string()
        };
        self.dependency_pb.set_message(display_path);
    }

    pub fn finish(&self) {
        self.dependency_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.dependency_pb.abandon();
    }

    #[cfg(test)]
    pub fn position(&self) -> u64 {
        self.dependency_pb.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_dependencies() {
        let progress = ProgressDisplay::hidden(2);
        progress.update_dependency("boost/1.87.0", 1, 2);
        progress.inc_dependency();
        progress.update_dependency("slang/8.0", 2, 2);
        progress.inc_dependency();
        assert_eq!(progress.position(), 2);
        progress.finish();
    }

    #[test]
    fn test_long_path_message_is_truncated() {
        let progress = ProgressDisplay::hidden(1);
        let long = format!("/out/include/{}/header.hpp", "nested/".repeat(20));
        progress.update_file(&long);
        progress.update_file("short.h");
        progress.abandon();
    }
}
