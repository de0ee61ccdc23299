// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::types::NodeId;

/// Errors reported by structural [`Scene`](crate::Scene) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// The identifier refers to an element that was removed (or never existed).
    #[error("node {0:?} is not alive in this scene")]
    StaleNode(NodeId),
    /// Attaching `node` under `parent` would make `node` its own ancestor.
    #[error("attaching {node:?} under {parent:?} would create a cycle")]
    Cycle {
        /// The element being moved.
        node: NodeId,
        /// The requested new parent, which lies inside `node`'s subtree.
        parent: NodeId,
    },
}
