//! Claim registry that raises claim-added notifications
//!
//! Claims added through [`Territory::add`] notify every listener exactly
//! once. Claims created on a listener's behalf go through
//! [`Territory::add_without_rerunning`] or straight into the store, and
//! notify nobody, so a listener that creates claims cannot recurse into
//! itself.

use tracing::debug;

use super::claim::Claim;
use super::store::ClaimStore;

/// Something that reacts to externally initiated claims
pub trait ClaimListener {
    /// Called after `claim` is visible in `store`
    fn on_claim_added(&self, claim: &Claim, store: &mut dyn ClaimStore);
}

/// A claim store plus the listeners interested in it
pub struct Territory<S: ClaimStore> {
    store: S,
    listeners: Vec<Box<dyn ClaimListener>>,
}

impl<S: ClaimStore> Territory<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            listeners: Vec::new(),
        }
    }

    pub fn with_listener(mut self, listener: impl ClaimListener + 'static) -> Self {
        self.subscribe(listener);
        self
    }

    pub fn subscribe(&mut self, listener: impl ClaimListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Add a claim and notify every listener once
    pub fn add(&mut self, claim: Claim) {
        debug!(
            "Claim added at ({}, {}) in {} for {}",
            claim.x, claim.z, claim.level, claim.faction
        );
        self.store.insert(claim.clone());
        for listener in &self.listeners {
            listener.on_claim_added(&claim, &mut self.store);
        }
    }

    /// Add a claim without notifying anyone
    pub fn add_without_rerunning(&mut self, claim: Claim) {
        self.store.insert(claim);
    }
}
