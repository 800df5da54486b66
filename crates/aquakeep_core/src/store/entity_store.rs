use crate::rules::{validate_create, validate_update, FieldValue, Fields, Rule};
use crate::store::{EntityId, Latency, StoreError, StoreResult};
use log::debug;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Record type managed by an `EntityStore`.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Create payload. Must expose every field named by the store's rules.
    type Draft: Fields + Send + Sync;
    /// Update payload: target id plus any subset of the other fields.
    type Patch: Fields + Send + Sync;

    /// Short label used in errors and log events.
    const KIND: &'static str;

    fn id(&self) -> EntityId;

    /// Builds a record from an already validated draft.
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;

    /// Id of the record a patch targets.
    fn patch_id(patch: &Self::Patch) -> EntityId;

    /// Shallow merge: supplied fields overwrite, absent fields persist.
    fn merge(&mut self, patch: &Self::Patch);
}

/// Records that belong to one aquarium.
pub trait AquariumScoped {
    fn aquarium_id(&self) -> EntityId;
}

/// Recomputes a dependent field. Receives `None` on create and the applied
/// patch on update.
pub type Derivation<T> = fn(&mut T, Option<&<T as Entity>::Patch>);

/// Another store's view used to accept or reject a foreign key.
pub trait ReferenceTarget: Send + Sync {
    fn verify(&self, id: EntityId) -> StoreResult<()>;
}

/// Foreign-key field checked against a `ReferenceTarget` before writes.
#[derive(Clone)]
pub struct CrossReference {
    pub field: &'static str,
    pub target: Arc<dyn ReferenceTarget>,
}

impl CrossReference {
    pub fn new(field: &'static str, target: Arc<dyn ReferenceTarget>) -> Self {
        Self { field, target }
    }

    fn check<P: Fields + ?Sized>(&self, payload: &P) -> StoreResult<()> {
        match payload.field(self.field) {
            Some(FieldValue::Reference(id)) => self.target.verify(id),
            _ => Ok(()),
        }
    }
}

/// Per-type behavior supplied at store construction.
pub struct StorePolicy<T: Entity> {
    rules: &'static [Rule],
    derivation: Option<Derivation<T>>,
    reference: Option<CrossReference>,
}

impl<T: Entity> StorePolicy<T> {
    pub fn new(rules: &'static [Rule]) -> Self {
        Self {
            rules,
            derivation: None,
            reference: None,
        }
    }

    pub fn with_derivation(mut self, derivation: Derivation<T>) -> Self {
        self.derivation = Some(derivation);
        self
    }

    pub fn with_reference(mut self, reference: CrossReference) -> Self {
        self.reference = Some(reference);
        self
    }

    fn check_reference<P: Fields + ?Sized>(&self, payload: &P) -> StoreResult<()> {
        match &self.reference {
            Some(reference) => reference.check(payload),
            None => Ok(()),
        }
    }

    fn derive(&self, record: &mut T, patch: Option<&T::Patch>) {
        if let Some(derivation) = self.derivation {
            derivation(record, patch);
        }
    }
}

struct StoreState<T> {
    records: Vec<T>,
    next_id: EntityId,
}

impl<T: Entity> StoreState<T> {
    fn position(&self, id: EntityId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

/// Owner of one entity type's ordered records and identity counter.
pub struct EntityStore<T: Entity> {
    state: RwLock<StoreState<T>>,
    policy: StorePolicy<T>,
    latency: Latency,
}

impl<T: Entity> EntityStore<T> {
    /// Creates a store from fully formed seed records.
    ///
    /// The identity counter starts at `max(seed ids) + 1`, or `1` when the
    /// seed is empty, and is never recomputed afterwards.
    pub fn new(seed: Vec<T>, policy: StorePolicy<T>, latency: Latency) -> Self {
        let next_id = seed.iter().map(Entity::id).max().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(StoreState {
                records: seed,
                next_id,
            }),
            policy,
            latency,
        }
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// Returns a copy of every record in insertion order.
    pub async fn find_all(&self) -> Vec<T> {
        self.latency.pause().await;
        self.snapshot()
    }

    pub async fn find_by_id(&self, id: EntityId) -> Option<T> {
        self.latency.pause().await;
        self.peek(id)
    }

    /// Returns matching records in insertion order.
    pub async fn find_where<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.latency.pause().await;
        self.read()
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Validates, assigns the next id, derives and appends a new record.
    pub async fn create(&self, draft: T::Draft) -> StoreResult<T> {
        self.latency.pause().await;

        validate_create(self.policy.rules, &draft)?;
        self.policy.check_reference(&draft)?;

        let mut state = self.write();
        let id = state.next_id;
        let mut record = T::from_draft(id, draft);
        self.policy.derive(&mut record, None);
        state.next_id += 1;
        state.records.push(record.clone());
        drop(state);

        debug!(
            "event=entity_create module=store kind={} id={} status=ok",
            T::KIND,
            id
        );
        Ok(record)
    }

    /// Merges a partial payload over an existing record in place.
    ///
    /// Only fields present in `patch` are validated; the reference field is
    /// only checked when the patch carries it.
    pub async fn update(&self, patch: T::Patch) -> StoreResult<T> {
        self.latency.pause().await;

        let id = T::patch_id(&patch);
        let mut state = self.write();
        let index = state
            .position(id)
            .ok_or(StoreError::NotFound { kind: T::KIND, id })?;

        validate_update(self.policy.rules, &patch)?;
        self.policy.check_reference(&patch)?;

        let mut record = state.records[index].clone();
        record.merge(&patch);
        self.policy.derive(&mut record, Some(&patch));
        state.records[index] = record.clone();
        drop(state);

        debug!(
            "event=entity_update module=store kind={} id={} status=ok",
            T::KIND,
            id
        );
        Ok(record)
    }

    /// Removes one record. Records in other stores that point at it are left as is.
    pub async fn remove(&self, id: EntityId) -> StoreResult<()> {
        self.latency.pause().await;

        let mut state = self.write();
        let index = state
            .position(id)
            .ok_or(StoreError::NotFound { kind: T::KIND, id })?;
        state.records.remove(index);
        drop(state);

        debug!(
            "event=entity_remove module=store kind={} id={} status=ok",
            T::KIND,
            id
        );
        Ok(())
    }

    /// Latency-free copy of the current records, used for cross-store reads.
    pub fn snapshot(&self) -> Vec<T> {
        self.read().records.clone()
    }

    /// Latency-free lookup of one record, used for cross-store reads.
    pub fn peek(&self, id: EntityId) -> Option<T> {
        let state = self.read();
        state
            .position(id)
            .and_then(|index| state.records.get(index).cloned())
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    /// Id the next successful `create` will assign.
    pub fn next_id(&self) -> EntityId {
        self.read().next_id
    }

    // Writes only touch state after every check has passed, so a poisoned
    // lock never holds a half-applied record.
    fn read(&self) -> RwLockReadGuard<'_, StoreState<T>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState<T>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Entity + AquariumScoped> EntityStore<T> {
    /// Returns records whose aquarium id equals `aquarium_id`, in insertion order.
    pub async fn find_by_aquarium_id(&self, aquarium_id: EntityId) -> Vec<T> {
        self.find_where(|record| record.aquarium_id() == aquarium_id)
            .await
    }
}
