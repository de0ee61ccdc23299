// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lodestar_focus::{FocusError, HandlerError};
use lodestar_scene::NodeId;

use crate::handlers::Slot;

/// Failure of a key dispatch pass.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// A key handler returned an error; the walk stopped there.
    #[error("{slot} handler of {node:?} failed")]
    Handler {
        /// Element whose handler failed.
        node: NodeId,
        /// Slot that failed.
        slot: Slot,
        /// Error returned by the handler.
        #[source]
        source: HandlerError,
    },
}

/// Errors surfaced by [`FocusManager`](crate::FocusManager).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Focus reconciliation failed.
    #[error(transparent)]
    Focus(#[from] FocusError),
    /// Key dispatch failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
