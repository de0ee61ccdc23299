// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Publishing side of focus: the tracked focused element and its path.

use alloc::boxed::Box;
use alloc::vec::Vec;

use lodestar_scene::{NodeId, Scene};

use crate::error::FocusError;
use crate::handlers::FocusHandlers;
use crate::path::FocusPath;
use crate::reconcile::reconcile;

/// Observer called with every newly published [`FocusPath`].
pub type PathObserver = Box<dyn FnMut(&FocusPath)>;

/// Handle returned by [`FocusTracker::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Tracks the focused element and publishes its [`FocusPath`].
///
/// ## Change semantics
///
/// - The element passed to [`FocusTracker::new`] is the value at subscription
///   time. It is remembered but not reconciled, so the published path starts
///   empty and the first real change reports it as the previous element.
/// - [`FocusTracker::set_focused`] reconciles only when the value changes.
/// - A failed reconciliation leaves both the tracked element and the published
///   path untouched, so the next change diffs against the last good path.
pub struct FocusTracker {
    focused: Option<NodeId>,
    path: FocusPath,
    observers: Vec<(SubscriptionId, PathObserver)>,
    next_subscription: u64,
}

impl core::fmt::Debug for FocusTracker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FocusTracker")
            .field("focused", &self.focused)
            .field("path", &self.path)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Default for FocusTracker {
    fn default() -> Self {
        Self::new(None)
    }
}

impl FocusTracker {
    /// Create a tracker whose current value is `initial`.
    pub fn new(initial: Option<NodeId>) -> Self {
        Self {
            focused: initial,
            path: FocusPath::new(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The tracked focused element.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Snapshot of the published path.
    pub fn path(&self) -> FocusPath {
        self.path.clone()
    }

    /// Move focus to `node`.
    ///
    /// Returns `Ok(false)` without doing anything if `node` is already the
    /// tracked value, `Ok(true)` once the new path is published and observers
    /// have been notified. A removed `node` is rejected with
    /// [`FocusError::StaleNode`] even when it is the tracked value.
    pub fn set_focused(
        &mut self,
        scene: &mut Scene,
        handlers: &mut FocusHandlers,
        node: Option<NodeId>,
    ) -> Result<bool, FocusError> {
        if let Some(n) = node
            && !scene.is_alive(n)
        {
            return Err(FocusError::StaleNode(n));
        }
        if node == self.focused {
            return Ok(false);
        }
        let path = reconcile(scene, handlers, node, self.focused, &self.path)?;
        tracing::debug!(from = ?self.focused, to = ?node, depth = path.len(), "focus changed");
        self.focused = node;
        self.path = path;
        for (_, observer) in &mut self.observers {
            observer(&self.path);
        }
        Ok(true)
    }

    /// Call `observer` with every path published from now on.
    pub fn subscribe(&mut self, observer: impl FnMut(&FocusPath) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Stop notifying a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        before != self.observers.len()
    }
}
