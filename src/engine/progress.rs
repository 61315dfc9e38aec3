//! Progress bar utilities for displaying crawl status.

use kdam::{Animation, Bar, BarExt};

/// Create the per-repository progress bar (one tick per repository processed).
pub fn create_repo_bar(total: usize) -> Bar {
    kdam::tqdm!(total = total, desc = "repos", animation = Animation::Classic)
}

/// Advance the bar by one repository.
pub fn tick_repo_bar(bar: &mut Bar) {
    let _ = bar.update(1);
}
