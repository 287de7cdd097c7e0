//! # Extraction & Normalization Pipeline
//!
//! Turns free-form Nmap-style scan text into a normalized domain-controller
//! inventory. Data flows strictly left to right:
//!
//! ```text
//! raw text ──segmenter──► host blocks ──classifier──► host records
//!                                                          │
//!                                       inventory ◄──aggregator
//! ```
//!
//! The pipeline is purely functional over its input: no state survives a
//! run, and repeated calls over the same text yield identical inventories.

pub mod aggregator;
pub mod classifier;
pub mod commands;
pub mod export;
pub mod pipeline;
pub mod segmenter;
