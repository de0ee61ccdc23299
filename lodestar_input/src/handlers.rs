// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element key handler slots.

use alloc::boxed::Box;

use hashbrown::HashMap;
use lodestar_focus::{FocusPath, HandlerError};
use lodestar_scene::{NodeId, Scene};

use crate::action::Action;
use crate::event::KeyEvent;

/// Propagation control returned by key handlers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Keep walking towards the root.
    #[default]
    Continue,
    /// The key was consumed; end the walk here.
    Stop,
}

/// Handler stored in an action slot or the `on_key_press` slot.
pub type KeyHandler = Box<dyn FnMut(&mut KeyContext<'_>) -> Result<Outcome, HandlerError>>;

/// Which handler slot of an element ran.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The handler registered for this action.
    Action(Action),
    /// The catch-all `on_key_press` handler.
    KeyPress,
}

impl core::fmt::Display for Slot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Action(action) => write!(f, "on_{action}"),
            Self::KeyPress => f.write_str("on_key_press"),
        }
    }
}

/// What a key handler sees.
///
/// One context is built per handler invocation, but `anchor` and `path` are
/// the same for every invocation of a dispatch pass.
#[derive(Debug)]
pub struct KeyContext<'a> {
    /// The raw event.
    pub event: &'a KeyEvent,
    /// The mapped action, `None` for unmapped keys.
    pub action: Option<&'a Action>,
    /// The element whose handler is running.
    pub node: NodeId,
    /// The focused leaf when dispatch started.
    pub anchor: NodeId,
    /// Read-only view of the scene.
    pub scene: &'a Scene,
    /// Snapshot of the focus path being walked.
    pub path: &'a FocusPath,
    pub(crate) focus_request: Option<NodeId>,
}

impl KeyContext<'_> {
    /// Ask for `node` to be focused once dispatch has finished.
    ///
    /// The request is not applied during the walk. When several handlers ask,
    /// the last request wins.
    pub fn request_focus(&mut self, node: NodeId) {
        self.focus_request = Some(node);
    }

    /// The pending focus request of this pass, if any.
    pub fn focus_request(&self) -> Option<NodeId> {
        self.focus_request
    }
}

#[derive(Default)]
struct NodeSlots {
    actions: HashMap<Action, KeyHandler>,
    key_press: Option<KeyHandler>,
}

/// Table of key handlers keyed by element.
///
/// Each element may have one handler per [`Action`] and one `on_key_press`
/// handler that sees every key, mapped or not.
#[derive(Default)]
pub struct KeyHandlers {
    nodes: HashMap<NodeId, NodeSlots>,
}

impl core::fmt::Debug for KeyHandlers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyHandlers")
            .field("nodes", &self.nodes.len())
            .finish_non_exhaustive()
    }
}

impl KeyHandlers {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the handler for `action` on `node`, replacing any previous one.
    pub fn on_action(
        &mut self,
        node: NodeId,
        action: impl Into<Action>,
        handler: impl FnMut(&mut KeyContext<'_>) -> Result<Outcome, HandlerError> + 'static,
    ) {
        self.nodes
            .entry(node)
            .or_default()
            .actions
            .insert(action.into(), Box::new(handler));
    }

    /// Set the catch-all key handler on `node`.
    pub fn on_key_press(
        &mut self,
        node: NodeId,
        handler: impl FnMut(&mut KeyContext<'_>) -> Result<Outcome, HandlerError> + 'static,
    ) {
        self.nodes.entry(node).or_default().key_press = Some(Box::new(handler));
    }

    /// Remove the handler for `action` on `node`. Returns whether one existed.
    pub fn remove_action(&mut self, node: NodeId, action: &Action) -> bool {
        self.nodes
            .get_mut(&node)
            .is_some_and(|slots| slots.actions.remove(action).is_some())
    }

    /// Drop every handler registered for `node`.
    pub fn clear(&mut self, node: NodeId) {
        self.nodes.remove(&node);
    }

    /// Whether `node` has a handler in `slot`.
    pub fn has(&self, node: NodeId, slot: &Slot) -> bool {
        self.nodes.get(&node).is_some_and(|slots| match slot {
            Slot::Action(action) => slots.actions.contains_key(action),
            Slot::KeyPress => slots.key_press.is_some(),
        })
    }

    pub(crate) fn action_mut(&mut self, node: NodeId, action: &Action) -> Option<&mut KeyHandler> {
        self.nodes.get_mut(&node)?.actions.get_mut(action)
    }

    pub(crate) fn key_press_mut(&mut self, node: NodeId) -> Option<&mut KeyHandler> {
        self.nodes.get_mut(&node)?.key_press.as_mut()
    }
}
