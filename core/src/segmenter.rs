//! # Host Block Segmenter
//!
//! Splits raw scan text into per-host blocks in a single forward pass. A
//! block starts at every `Nmap scan report for <target>` header and runs to
//! the next header or end of input. Lines before the first header are
//! discarded. A repeated address starts a new block; merging is the
//! aggregator's job, so multi-pass scan files combine instead of losing data.

use dchound_common::directory::host::RawHostBlock;

const HEADER_PREFIX: &str = "Nmap scan report for ";

/// Lazily yields one [`RawHostBlock`] per host header, in first-seen order.
///
/// Zero headers yield zero blocks; that is a reportable result, not an
/// error.
pub fn blocks(text: &str) -> Blocks<'_> {
    Blocks {
        lines: text.lines(),
        carried: None,
    }
}

pub struct Blocks<'a> {
    lines: std::str::Lines<'a>,
    /// Header line of the next block, seen while collecting the current one.
    carried: Option<(&'a str, &'a str)>,
}

impl Iterator for Blocks<'_> {
    type Item = RawHostBlock;

    fn next(&mut self) -> Option<RawHostBlock> {
        let (header_line, target) = match self.carried.take() {
            Some(carried) => carried,
            None => loop {
                let line = self.lines.next()?;
                if let Some(target) = header_target(line) {
                    break (line, target);
                }
            },
        };

        // Block text keeps the header line so the classifier can recover
        // the reverse-DNS name from it.
        let mut text = String::from(header_line);
        for line in self.lines.by_ref() {
            if let Some(next_target) = header_target(line) {
                self.carried = Some((line, next_target));
                break;
            }
            text.push('\n');
            text.push_str(line);
        }

        Some(RawHostBlock {
            address: block_address(target).to_string(),
            text,
        })
    }
}

/// The scan target named by a header line, or `None` for any other line.
pub(crate) fn header_target(line: &str) -> Option<&str> {
    line.trim().strip_prefix(HEADER_PREFIX).map(str::trim)
}

/// The block address for a header target: the parenthesized IP of a
/// `name (address)` form wins, otherwise the bare target is used verbatim.
pub(crate) fn block_address(target: &str) -> &str {
    if let Some(rest) = target.strip_suffix(')') {
        if let Some(open) = rest.rfind('(') {
            return rest[open + 1..].trim();
        }
    }
    target
}
