// SPDX-License-Identifier: MPL-2.0
//! Display-related domain types.

pub mod orientation;

pub use orientation::Orientation;
