// Copyright 2025 the Lodestar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// A raw key press as delivered by the platform.
///
/// `key` is the key identifier (for example `"ArrowLeft"` or `"a"`), and
/// `key_code` the legacy numeric code. Sources that only know the numeric code
/// leave `key` empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// Key identifier.
    pub key: String,
    /// Legacy numeric key code.
    pub key_code: u32,
}

impl KeyEvent {
    /// Create an event carrying both an identifier and a code.
    pub fn new(key: impl Into<String>, key_code: u32) -> Self {
        Self {
            key: key.into(),
            key_code,
        }
    }

    /// Create an event from a source that only reports numeric codes.
    pub fn from_code(key_code: u32) -> Self {
        Self {
            key: String::new(),
            key_code,
        }
    }
}
