// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lodestar Scene: the element tree that focus tracking and key dispatch walk.
//!
//! A [`Scene`] is a small generational arena of elements. It models exactly what
//! the focus and input crates need from a scene graph, and nothing about
//! rendering or layout:
//!
//! - Parent back-links and ordered children ([`Scene::parent_of`], [`Scene::children_of`]).
//! - A set of style-state flags per element ([`States`]); the focus reconciler
//!   toggles [`States::FOCUS`].
//! - Behavioral flags set by the host ([`NodeFlags`]), such as
//!   [`NodeFlags::SKIP_FOCUS`] for children that directional navigation passes over.
//!
//! Elements are identified by [`NodeId`]. Removing an element makes its id stale
//! forever; a recycled slot is handed out with a bumped generation, so stale ids
//! never alias new elements.
//!
//! ```rust
//! use lodestar_scene::{NodeFlags, Scene, States};
//!
//! let mut scene = Scene::new();
//! let root = scene.insert(None, NodeFlags::default()).unwrap();
//! let row = scene.insert(Some(root), NodeFlags::default()).unwrap();
//! let tile = scene.insert(Some(row), NodeFlags::default()).unwrap();
//!
//! // Leaf-to-root walk, the order focus paths are built in.
//! let chain: Vec<_> = scene.ancestors(tile).collect();
//! assert_eq!(chain, vec![tile, row, root]);
//!
//! scene.insert_state(row, States::FOCUS);
//! assert!(scene.has_state(row, States::FOCUS));
//! ```
//!
//! Reparenting rejects moves that would make an element its own ancestor, so
//! every upward walk terminates.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod scene;
mod types;

pub use error::SceneError;
pub use scene::{Ancestors, Scene};
pub use types::{NodeFlags, NodeId, States};
