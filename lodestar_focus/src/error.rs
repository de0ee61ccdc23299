// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lodestar_scene::NodeId;

use crate::handlers::{FocusSlot, HandlerError};

/// Errors that abort a focus reconciliation.
#[derive(Debug, thiserror::Error)]
pub enum FocusError {
    /// The element to focus is not alive in the scene. Nothing was changed.
    #[error("cannot focus {0:?}: node is not alive")]
    StaleNode(NodeId),
    /// A focus or blur handler failed; the remaining transitions were not fired.
    #[error("{slot} handler of {node:?} failed")]
    Handler {
        /// Element whose handler failed.
        node: NodeId,
        /// Which callback failed.
        slot: FocusSlot,
        /// The handler's error.
        #[source]
        source: HandlerError,
    },
}
