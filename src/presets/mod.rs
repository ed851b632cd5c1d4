// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Preset macros: built-in seed data, invocation parsing and expansion

pub mod defaults;
mod expander;
mod invocation;

pub use defaults::{BUILTIN_PRESETS, BuiltinPresets, SENTINEL_INVOCATION, SENTINEL_MACRO};
pub use expander::Expander;
pub use invocation::Invocation;
