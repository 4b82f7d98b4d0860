// rrhfoem-rs/rrhfoem/src/reader/session.rs

//! Mifare Classic selection/authentication session state.

use std::collections::{HashMap, HashSet};

use crate::types::TagUid;

/// Mifare Classic session state: which card is selected on the device side
/// and which `(uid, block)` pairs hold a live authentication.
///
/// The cache exists to skip redundant select/authenticate round trips.
/// It is deliberately pessimistic: changing the selected card clears every
/// cached authentication (a selection change invalidates them card-side),
/// and any authentication failure clears the whole session because the
/// card state after a failed three-pass handshake is unknown.
#[derive(Debug, Default)]
pub struct MifareSession {
    selected: Option<TagUid>,
    authenticated: HashMap<TagUid, HashSet<u8>>,
}

impl MifareSession {
    /// Empty session: nothing selected, nothing authenticated.
    pub fn new() -> Self {
        Self::default()
    }

    /// The UID currently selected, if any.
    pub fn selected(&self) -> Option<&TagUid> {
        self.selected.as_ref()
    }

    /// True when `uid` is the currently selected card.
    pub fn is_selected(&self, uid: &TagUid) -> bool {
        self.selected.as_ref() == Some(uid)
    }

    /// Record a successful card selection. Selecting a different card
    /// drops every cached authentication.
    pub fn select(&mut self, uid: TagUid) {
        if self.selected.as_ref() != Some(&uid) {
            self.authenticated.clear();
        }
        self.selected = Some(uid);
    }

    /// True when `(uid, block)` holds a live authentication.
    pub fn is_authenticated(&self, uid: &TagUid, block: u8) -> bool {
        self.authenticated
            .get(uid)
            .is_some_and(|blocks| blocks.contains(&block))
    }

    /// Record a successful authentication for `(uid, block)`.
    pub fn mark_authenticated(&mut self, uid: TagUid, block: u8) {
        self.authenticated.entry(uid).or_default().insert(block);
    }

    /// Drop the entire session state. Called on any authentication
    /// failure, regardless of which UID failed.
    pub fn invalidate(&mut self) {
        self.selected = None;
        self.authenticated.clear();
    }
}
