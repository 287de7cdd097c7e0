//! # Domain Hints
//!
//! A host block rarely names its domain outright; instead it leaks several
//! weak signals (an explicit `Domain:` field, an LDAP naming context, the
//! FQDN suffix, a NetBIOS token). Each becomes a [`DomainHint`] tagged with
//! the kind that determined it, and reconciliation later picks the most
//! trustworthy one per host.

/// The source a domain hint was extracted from.
///
/// DNS-lane trust order: `ExplicitField > ForestField > NamingContext >
/// HostnameSuffix`. `NetbiosField` is reconciled in its own lane and carries
/// no DNS confidence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintKind {
    /// A line literally labeled `Domain:` or `Realm:`.
    ExplicitField,
    /// A line labeled `Forest:` or `Forest name:`.
    ForestField,
    /// A `DC=`-component naming string, converted to dotted form.
    NamingContext,
    /// The suffix of an FQDN hostname after its first label.
    HostnameSuffix,
    /// A short NetBIOS-style domain token from SMB output.
    NetbiosField,
}

impl HintKind {
    /// Trust ordinal for DNS-lane reconciliation; higher wins.
    pub fn confidence(self) -> u8 {
        match self {
            Self::ExplicitField => 4,
            Self::ForestField => 3,
            Self::NamingContext => 2,
            Self::HostnameSuffix => 1,
            Self::NetbiosField => 0,
        }
    }
}

/// One domain-identity signal extracted from a host block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainHint {
    pub value: String,
    pub kind: HintKind,
}

impl DomainHint {
    pub fn new(value: impl Into<String>, kind: HintKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}
