//! Concrete stores wired on top of the generic `EntityStore`.
//!
//! # Responsibility
//! - Bind each entity type to its rules, derivation and reference checks.
//! - Bundle all seven stores into one in-process backend.
//!
//! # Invariants
//! - Cross-store reads are latency-free snapshots taken at call time.
//! - No store mutates another store's records.

pub mod backend;
pub mod consumable_service;
pub mod feeding_service;
pub mod record_stores;
