//! The pure `parse` entry point gluing segmenter, classifier and aggregator
//! together in one synchronous pass.

use dchound_common::directory::inventory::Inventory;

use crate::{aggregator, classifier, segmenter};

/// Tunable parsing policy.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Counts `open|filtered` port states as open. On by default: aggressive
    /// scans report serving ports this way, but the threshold is an
    /// assumption, so it stays configurable.
    pub ambiguous_is_open: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            ambiguous_is_open: true,
        }
    }
}

/// Per-block progress callback, called with `(done, total)`.
pub type ProgressFn = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Parses scan text into an inventory under the default policy.
pub fn parse(text: &str) -> Inventory {
    parse_with(text, &ParseOptions::default())
}

pub fn parse_with(text: &str, options: &ParseOptions) -> Inventory {
    parse_with_progress(text, options, None)
}

/// Like [`parse_with`], reporting progress after every classified block.
pub fn parse_with_progress(
    text: &str,
    options: &ParseOptions,
    progress: Option<ProgressFn>,
) -> Inventory {
    let total = segmenter::blocks(text).count();
    let mut records = Vec::with_capacity(total);

    for (done, block) in segmenter::blocks(text).enumerate() {
        records.push(classifier::classify(&block, options));
        if let Some(report) = &progress {
            report(done + 1, total);
        }
    }

    aggregator::aggregate(records)
}
