use std::collections::BTreeSet;

use crate::directory::hint::DomainHint;
use crate::directory::signal::ServiceSignal;

/// One host's slice of the raw scan text, tagged with its address.
///
/// `text` keeps the header line so the classifier can recover the
/// reverse-DNS name from it. Ephemeral: produced by the segmenter, consumed
/// once by the classifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawHostBlock {
    pub address: String,
    pub text: String,
}

/// A classified host: open AD ports, raised service signals and every
/// domain hint its block leaked, in discovery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostRecord {
    pub address: String,
    pub hostname: Option<String>,
    pub signals: BTreeSet<ServiceSignal>,
    pub ports: BTreeSet<u16>,
    pub hints: Vec<DomainHint>,
}

impl HostRecord {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            hostname: None,
            signals: BTreeSet::new(),
            ports: BTreeSet::new(),
            hints: Vec::new(),
        }
    }

    /// The DC predicate: Kerberos plus a directory service.
    ///
    /// SMB alone or LDAP alone is far too common on member servers to count;
    /// the conjunction is the system's accuracy claim and must hold exactly.
    pub fn is_domain_controller(&self) -> bool {
        self.signals.contains(&ServiceSignal::Kerberos)
            && (self.signals.contains(&ServiceSignal::Ldap)
                || self.signals.contains(&ServiceSignal::Ldaps))
    }
}
