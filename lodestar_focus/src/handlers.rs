// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element focus and blur callbacks.

use alloc::boxed::Box;

use hashbrown::HashMap;
use lodestar_scene::{NodeId, Scene};

use crate::error::FocusError;

/// Error type returned by element callbacks.
pub type HandlerError = Box<dyn core::error::Error + Send + Sync>;

/// Callback stored in a focus or blur slot.
pub type FocusCallback = Box<dyn FnMut(&FocusChange<'_>) -> Result<(), HandlerError>>;

/// Which focus callback slot is being invoked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusSlot {
    /// The element entered the focus path.
    Focus,
    /// The element left the focus path.
    Blur,
}

impl core::fmt::Display for FocusSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Focus => "on_focus",
            Self::Blur => "on_blur",
        })
    }
}

/// Arguments passed to a focus or blur callback.
#[derive(Copy, Clone, Debug)]
pub struct FocusChange<'a> {
    /// Scene as of the callback (read only).
    pub scene: &'a Scene,
    /// The element whose callback is running.
    pub node: NodeId,
    /// The newly focused leaf.
    pub current: Option<NodeId>,
    /// The previously focused leaf.
    pub previous: Option<NodeId>,
}

#[derive(Default)]
struct Slots {
    focus: Option<FocusCallback>,
    blur: Option<FocusCallback>,
}

/// Table of `on_focus` / `on_blur` callbacks keyed by element.
///
/// Both slots are optional; an element without callbacks still takes part in
/// the focus path and still has its [`States::FOCUS`](lodestar_scene::States::FOCUS)
/// flag maintained.
#[derive(Default)]
pub struct FocusHandlers {
    slots: HashMap<NodeId, Slots>,
}

impl core::fmt::Debug for FocusHandlers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FocusHandlers")
            .field("nodes", &self.slots.len())
            .finish_non_exhaustive()
    }
}

impl FocusHandlers {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the callback fired when `node` enters the focus path.
    pub fn on_focus(
        &mut self,
        node: NodeId,
        callback: impl FnMut(&FocusChange<'_>) -> Result<(), HandlerError> + 'static,
    ) {
        self.slots.entry(node).or_default().focus = Some(Box::new(callback));
    }

    /// Set the callback fired when `node` leaves the focus path.
    pub fn on_blur(
        &mut self,
        node: NodeId,
        callback: impl FnMut(&FocusChange<'_>) -> Result<(), HandlerError> + 'static,
    ) {
        self.slots.entry(node).or_default().blur = Some(Box::new(callback));
    }

    /// Drop all callbacks registered for `node`.
    pub fn clear(&mut self, node: NodeId) {
        self.slots.remove(&node);
    }

    /// Whether `node` has a callback in `slot`.
    pub fn has(&self, node: NodeId, slot: FocusSlot) -> bool {
        self.slots.get(&node).is_some_and(|s| match slot {
            FocusSlot::Focus => s.focus.is_some(),
            FocusSlot::Blur => s.blur.is_some(),
        })
    }

    /// Invoke the callback in `slot` for `change.node`, if any.
    pub(crate) fn invoke(
        &mut self,
        slot: FocusSlot,
        change: &FocusChange<'_>,
    ) -> Result<(), FocusError> {
        let Some(slots) = self.slots.get_mut(&change.node) else {
            return Ok(());
        };
        let callback = match slot {
            FocusSlot::Focus => slots.focus.as_mut(),
            FocusSlot::Blur => slots.blur.as_mut(),
        };
        match callback {
            Some(cb) => cb(change).map_err(|source| FocusError::Handler {
                node: change.node,
                slot,
                source,
            }),
            None => Ok(()),
        }
    }
}
