//! Generic in-memory entity store.
//!
//! # Responsibility
//! - Own one ordered record sequence and its identity counter per entity type.
//! - Run validation, cross-reference checks and derivation before any write.
//!
//! # Invariants
//! - Ids are assigned from a counter seeded at `max(seed ids) + 1` and never reused.
//! - A failed operation leaves the store unchanged.
//! - Lock guards are never held across an `.await`.

mod entity_store;
mod error;
mod latency;

pub use entity_store::{
    AquariumScoped, CrossReference, Derivation, Entity, EntityStore, ReferenceTarget, StorePolicy,
};
pub use error::{StoreError, StoreResult};
pub use latency::{Latency, SIMULATED_ROUND_TRIP};

/// Store-assigned record identity.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = i64;
