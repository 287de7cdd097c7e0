use std::collections::BTreeSet;

use crate::directory::signal::ServiceSignal;

/// A confirmed domain controller with its reconciled domain identity.
///
/// `domain`/`netbios` are the winners of hint reconciliation; `None` means
/// no hint of that lane resolved and downstream consumers must ask the
/// operator instead of fabricating a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainControllerRecord {
    pub address: String,
    pub hostname: Option<String>,
    pub domain: Option<String>,
    pub netbios: Option<String>,
    pub ports: BTreeSet<u16>,
    pub services: BTreeSet<ServiceSignal>,
}

impl DomainControllerRecord {
    /// Collection target: the FQDN when known, the address otherwise.
    pub fn target(&self) -> &str {
        self.hostname.as_deref().unwrap_or(&self.address)
    }
}

/// The final artifact of a parse run.
///
/// `domains`/`netbios_domains` are first-seen ordered and case-insensitively
/// deduplicated, with the display form of the first occurrence preserved.
/// `total_hosts` counts distinct addresses, so parsing a scan with a block
/// duplicated verbatim yields the same inventory as parsing it once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    pub total_hosts: usize,
    pub domain_controllers: Vec<DomainControllerRecord>,
    pub domains: Vec<String>,
    pub netbios_domains: Vec<String>,
}
