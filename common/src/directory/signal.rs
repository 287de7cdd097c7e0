//! # Service Signals
//!
//! The closed set of Active-Directory-relevant services, each bound to the
//! port that implies it. A signal is present on a host iff its governing port
//! is reported open in that host's scan block.

/// An AD-relevant service recognized from an open port.
///
/// `Ord` is derived so signal sets can live in a `BTreeSet` and iterate
/// deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceSignal {
    Dns,
    Kerberos,
    Rpc,
    Ldap,
    Smb,
    Ldaps,
    GlobalCatalog,
    GlobalCatalogSsl,
}

impl ServiceSignal {
    /// Maps an open port to its service, if the port is in the AD table.
    pub fn from_port(port: u16) -> Option<Self> {
        match port {
            53 => Some(Self::Dns),
            88 => Some(Self::Kerberos),
            135 => Some(Self::Rpc),
            389 => Some(Self::Ldap),
            445 => Some(Self::Smb),
            636 => Some(Self::Ldaps),
            3268 => Some(Self::GlobalCatalog),
            3269 => Some(Self::GlobalCatalogSsl),
            _ => None,
        }
    }

    /// The port that raises this signal.
    pub fn port(self) -> u16 {
        match self {
            Self::Dns => 53,
            Self::Kerberos => 88,
            Self::Rpc => 135,
            Self::Ldap => 389,
            Self::Smb => 445,
            Self::Ldaps => 636,
            Self::GlobalCatalog => 3268,
            Self::GlobalCatalogSsl => 3269,
        }
    }

    /// Display name, also the wire form in the exported JSON artifact.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dns => "DNS",
            Self::Kerberos => "Kerberos",
            Self::Rpc => "RPC",
            Self::Ldap => "LDAP",
            Self::Smb => "SMB",
            Self::Ldaps => "LDAPS",
            Self::GlobalCatalog => "Global Catalog",
            Self::GlobalCatalogSsl => "Global Catalog SSL",
        }
    }
}
