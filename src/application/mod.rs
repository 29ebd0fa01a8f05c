// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the player widget depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for the platform collaborators
//!
//! # Dependency Rule
//!
//! - The widget only talks to collaborators through these traits
//! - Infrastructure adapters implement them
//! - Tests substitute in-memory fakes

pub mod port;
