//! # Export Record
//!
//! The JSON artifact consumed by downstream automation. Field names and
//! nesting are a compatibility contract; change them and every consumer of
//! `domain_controllers_<ts>.json` breaks.

use dchound_common::directory::inventory::Inventory;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExportRecord {
    pub timestamp: String,
    pub total_hosts: usize,
    pub total_dcs: usize,
    pub domains: Vec<String>,
    pub netbios_domains: Vec<String>,
    pub domain_controllers: Vec<ExportedController>,
}

#[derive(Debug, Serialize)]
pub struct ExportedController {
    pub ip: String,
    /// Always present; falls back to the address when no name resolved.
    pub hostname: String,
    pub domain: Option<String>,
    pub netbios: Option<String>,
    pub ports: Vec<u16>,
    pub services: Vec<&'static str>,
}

impl ExportRecord {
    pub fn new(inventory: &Inventory, timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            total_hosts: inventory.total_hosts,
            total_dcs: inventory.domain_controllers.len(),
            domains: inventory.domains.clone(),
            netbios_domains: inventory.netbios_domains.clone(),
            domain_controllers: inventory
                .domain_controllers
                .iter()
                .map(|dc| ExportedController {
                    ip: dc.address.clone(),
                    hostname: dc.target().to_string(),
                    domain: dc.domain.clone(),
                    netbios: dc.netbios.clone(),
                    ports: dc.ports.iter().copied().collect(),
                    services: dc.services.iter().map(|signal| signal.label()).collect(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
