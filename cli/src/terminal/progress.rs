use indicatif::{ProgressBar, ProgressStyle};

/// Scans below this many blocks parse too fast for a bar to be visible.
pub const BAR_THRESHOLD: usize = 100;

pub fn parse_bar(total: usize) -> ProgressBar {
    let bar: ProgressBar = ProgressBar::new(total as u64);
    let style: ProgressStyle =
        ProgressStyle::with_template("{bar:40.green/black} {pos}/{len} hosts").unwrap();
    bar.set_style(style);
    bar
}
