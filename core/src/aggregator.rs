//! # Domain Controller Aggregator
//!
//! Merges repeated blocks for the same address, filters hosts through the
//! DC predicate and reconciles each qualifying host's weak domain hints
//! into one canonical record. Reconciliation is a stable ranked scan over
//! [`HintKind::confidence`]: the DNS and NetBIOS lanes are resolved
//! independently, and within a kind the first-encountered hint wins, so the
//! trust order stays auditable and the output deterministic.

use std::collections::HashMap;

use dchound_common::directory::hint::{DomainHint, HintKind};
use dchound_common::directory::host::HostRecord;
use dchound_common::directory::inventory::{DomainControllerRecord, Inventory};

/// Collapses classified host records into the final inventory.
///
/// Zero qualifying hosts yield an inventory with empty controller and
/// domain lists, which is a valid, reportable result.
pub fn aggregate(records: Vec<HostRecord>) -> Inventory {
    let merged = merge_by_address(records);
    let total_hosts = merged.len();

    let mut domain_controllers: Vec<DomainControllerRecord> = Vec::new();
    let mut domains: Vec<String> = Vec::new();
    let mut netbios_domains: Vec<String> = Vec::new();

    for record in merged {
        if !record.is_domain_controller() {
            continue;
        }

        let domain = resolve_dns(&record.hints);
        let netbios = resolve_netbios(&record.hints);

        if let Some(domain) = &domain {
            push_unique(&mut domains, domain);
        }
        if let Some(netbios) = &netbios {
            push_unique(&mut netbios_domains, netbios);
        }

        domain_controllers.push(DomainControllerRecord {
            address: record.address,
            hostname: record.hostname,
            domain,
            netbios,
            ports: record.ports,
            services: record.signals,
        });
    }

    Inventory {
        total_hosts,
        domain_controllers,
        domains,
        netbios_domains,
    }
}

/// Merges records sharing an address, keeping first-seen order: signals and
/// ports union, hints concatenate in encounter order, the first hostname
/// sticks. Reconciliation then runs once over the merged hint set.
fn merge_by_address(records: Vec<HostRecord>) -> Vec<HostRecord> {
    let mut merged: Vec<HostRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index.get(&record.address) {
            Some(&at) => {
                let existing = &mut merged[at];
                existing.signals.extend(record.signals);
                existing.ports.extend(record.ports);
                existing.hints.extend(record.hints);
                if existing.hostname.is_none() {
                    existing.hostname = record.hostname;
                }
            }
            None => {
                index.insert(record.address.clone(), merged.len());
                merged.push(record);
            }
        }
    }
    merged
}

/// DNS-lane winner: highest confidence, first within a kind. Strict `>`
/// keeps the earliest hint of the winning kind.
pub fn resolve_dns(hints: &[DomainHint]) -> Option<String> {
    let mut best: Option<&DomainHint> = None;
    for hint in hints {
        if hint.kind == HintKind::NetbiosField || hint.value.is_empty() {
            continue;
        }
        if best.is_none_or(|b| hint.kind.confidence() > b.kind.confidence()) {
            best = Some(hint);
        }
    }
    best.map(|hint| hint.value.clone())
}

/// NetBIOS-lane winner: the first non-empty `NetbiosField` hint.
pub fn resolve_netbios(hints: &[DomainHint]) -> Option<String> {
    hints
        .iter()
        .find(|hint| hint.kind == HintKind::NetbiosField && !hint.value.is_empty())
        .map(|hint| hint.value.clone())
}

/// Case-insensitive dedup preserving the display form of the first
/// occurrence.
fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|seen| seen.eq_ignore_ascii_case(value)) {
        values.push(value.to_string());
    }
}
