//! # Directory Inventory Model
//!
//! The entities flowing through the extraction pipeline, from raw scan text
//! to the final domain-controller inventory:
//!
//! * [`host::RawHostBlock`] — one host's slice of the scan text.
//! * [`signal::ServiceSignal`] — AD-relevant services keyed by port.
//! * [`hint::DomainHint`] — a weak domain-identity signal with a trust rank.
//! * [`host::HostRecord`] — one classified host.
//! * [`inventory::Inventory`] — the aggregated, deduplicated result.

pub mod hint;
pub mod host;
pub mod inventory;
pub mod signal;
