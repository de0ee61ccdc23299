// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: element identifiers and flag sets.

/// Identifier for an element in a [`Scene`](crate::Scene) (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Style states carried by an element.
    ///
    /// These are the tags a styling layer keys alternate styles on. Only
    /// [`States::FOCUS`] is managed by Lodestar itself; the rest belong to the host.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct States: u8 {
        /// Element is on the current focus path.
        const FOCUS    = 0b0000_0001;
        /// Element is being pressed or otherwise activated.
        const ACTIVE   = 0b0000_0010;
        /// Element is the selected child of its container.
        const SELECTED = 0b0000_0100;
        /// Element is disabled; navigation skips it.
        const DISABLED = 0b0000_1000;
    }
}

bitflags::bitflags! {
    /// Behavioral flags set by the host when building the scene.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Directional navigation passes over this element.
        const SKIP_FOCUS = 0b0000_0001;
    }
}
