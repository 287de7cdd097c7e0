//! # Host Classifier & Signal Extractor
//!
//! Turns one raw host block into one [`HostRecord`]: open AD ports become
//! service signals, and every domain-identity leak in the block becomes a
//! [`DomainHint`] in discovery order.
//!
//! Parsing is best-effort by design. Scan tool output varies widely in
//! formatting, so every recognizer is an `Option`-returning attempt composed
//! left to right; a line nothing recognizes simply contributes no signal and
//! no hint. The classifier never fails.

use dchound_common::directory::hint::{DomainHint, HintKind};
use dchound_common::directory::host::{HostRecord, RawHostBlock};
use dchound_common::directory::signal::ServiceSignal;
use tracing::trace;

use crate::pipeline::ParseOptions;
use crate::segmenter;

/// Classifies one block. Every block yields exactly one record, even one
/// with no signals and no hints; filtering happens in the aggregator.
pub fn classify(block: &RawHostBlock, options: &ParseOptions) -> HostRecord {
    let mut record = HostRecord::new(block.address.clone());
    // Computer-name NetBIOS hints rank below domain-labeled ones, enforced
    // by appending them after the line scan (reconciliation is first-wins
    // within a kind).
    let mut netbios_fallback: Vec<DomainHint> = Vec::new();

    let mut lines = block.text.lines();
    if let Some(header) = lines.next() {
        record.hostname = header_hostname(header);
    }

    for line in lines {
        let line = strip_script_prefix(line);
        if line.is_empty() {
            continue;
        }

        if let Some((port, open)) = port_state(line, options) {
            if open {
                if let Some(signal) = ServiceSignal::from_port(port) {
                    record.ports.insert(port);
                    record.signals.insert(signal);
                }
            }
            continue;
        }

        if record.hostname.is_none() {
            if let Some(name) = hostname_annotation(line) {
                record.hostname = Some(name);
                continue;
            }
        }

        extract_hints(line, &mut record.hints, &mut netbios_fallback);
    }

    if let Some(suffix) = record.hostname.as_deref().and_then(fqdn_suffix) {
        record.hints.push(DomainHint::new(suffix, HintKind::HostnameSuffix));
    }
    record.hints.extend(netbios_fallback);

    trace!(
        address = %record.address,
        signals = record.signals.len(),
        hints = record.hints.len(),
        "classified host block"
    );
    record
}

/// Nmap script output is prefixed with `|` / `|_`; strip it before matching.
fn strip_script_prefix(line: &str) -> &str {
    let line = line.trim_start();
    let line = line.strip_prefix("|_").unwrap_or(line);
    let line = line.strip_prefix('|').unwrap_or(line);
    line.trim()
}

/// `<port>/<proto> <state> [service...]` → `(port, counted open)`.
fn port_state(line: &str, options: &ParseOptions) -> Option<(u16, bool)> {
    let mut tokens = line.split_whitespace();
    let entry = tokens.next()?;
    let state = tokens.next()?;

    let (port, proto) = entry.split_once('/')?;
    if proto != "tcp" && proto != "udp" {
        return None;
    }
    let port: u16 = port.parse().ok()?;

    let open = state == "open" || (state == "open|filtered" && options.ambiguous_is_open);
    Some((port, open))
}

/// Hostname from a `name (ip)` header, or a bare non-IP header target.
fn header_hostname(header: &str) -> Option<String> {
    let target = segmenter::header_target(header)?;

    if let Some(rest) = target.strip_suffix(')') {
        let open = rest.rfind('(')?;
        let name = rest[..open].trim();
        return (!name.is_empty()).then(|| name.to_string());
    }

    if target.parse::<std::net::IpAddr>().is_err() {
        return Some(target.to_string());
    }
    None
}

/// `Hostname:` or `DNS computer name` annotations (NTLM-info emits the
/// latter as `DNS_Computer_Name:`).
fn hostname_annotation(line: &str) -> Option<String> {
    let search = searchable(line);
    after_label(line, &search, "hostname:")
        .or_else(|| after_label(line, &search, "dns computer name:"))
        .and_then(domain_token)
}

/// All domain hints a single line carries. NetBIOS-flavored lines feed the
/// NetBIOS lane only; everything else may feed the DNS lane.
fn extract_hints(line: &str, hints: &mut Vec<DomainHint>, fallback: &mut Vec<DomainHint>) {
    let search = searchable(line);

    if search.contains("netbios") {
        if let Some(idx) = search.find("domain") {
            if let Some(value) = value_after_colon(&line[idx..]).and_then(netbios_token) {
                hints.push(DomainHint::new(value, HintKind::NetbiosField));
            }
        } else if let Some(idx) = search.find("computer").or_else(|| search.find("name")) {
            if let Some(value) = value_after_colon(&line[idx..]).and_then(netbios_token) {
                fallback.push(DomainHint::new(value, HintKind::NetbiosField));
            }
        }
        return;
    }

    if search.contains("workgroup") {
        if let Some(value) = value_after_colon(line).and_then(netbios_token) {
            hints.push(DomainHint::new(value, HintKind::NetbiosField));
        }
        return;
    }

    if let Some(value) = after_label(line, &search, "domain name:")
        .or_else(|| after_label(line, &search, "domain:"))
        .or_else(|| after_label(line, &search, "realm:"))
        .and_then(domain_token)
    {
        hints.push(DomainHint::new(value, HintKind::ExplicitField));
        return;
    }

    if let Some(value) = after_label(line, &search, "forest name:")
        .or_else(|| after_label(line, &search, "forest:"))
        .and_then(domain_token)
    {
        hints.push(DomainHint::new(value, HintKind::ForestField));
        return;
    }

    if let Some(idx) = search.find("dc=") {
        if let Some(value) = naming_context(&line[idx..]) {
            hints.push(DomainHint::new(value, HintKind::NamingContext));
        }
    }
}

/// `DC=corp,DC=local` → `CORP.LOCAL`. Non-`DC=` components are skipped.
fn naming_context(context: &str) -> Option<String> {
    let components: Vec<String> = context
        .split(',')
        .filter_map(|part| {
            let part = part.trim();
            let prefix = part.get(..3)?;
            if !prefix.eq_ignore_ascii_case("dc=") {
                return None;
            }
            let value: String = part[3..]
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
                .collect();
            (!value.is_empty()).then_some(value)
        })
        .collect();

    (!components.is_empty()).then(|| components.join(".").to_uppercase())
}

/// Lowercased copy with underscores flattened to spaces; ASCII-only edits,
/// so byte offsets stay aligned with the original line.
fn searchable(line: &str) -> String {
    line.to_ascii_lowercase().replace('_', " ")
}

/// The value following `label` in `line`, located via the searchable form.
fn after_label<'a>(line: &'a str, search: &str, label: &str) -> Option<&'a str> {
    let idx = search.find(label)?;
    Some(line[idx + label.len()..].trim_start())
}

fn value_after_colon(s: &str) -> Option<&str> {
    s.split_once(':').map(|(_, value)| value.trim_start())
}

/// Leading `[A-Za-z0-9.-]` run with trailing dots trimmed.
fn domain_token(s: &str) -> Option<String> {
    let token: String = s
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '-')
        .collect();
    let token = token.trim_matches('.');
    (!token.is_empty()).then(|| token.to_string())
}

/// NetBIOS-style token: ≤15 chars, no dots, upper-cased.
fn netbios_token(s: &str) -> Option<String> {
    let token: String = s
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if token.is_empty() || token.len() > 15 {
        return None;
    }
    Some(token.to_ascii_uppercase())
}

/// FQDN suffix after the first label, when at least two labels exist.
fn fqdn_suffix(hostname: &str) -> Option<String> {
    let (_, suffix) = hostname.split_once('.')?;
    (!suffix.is_empty()).then(|| suffix.to_string())
}
