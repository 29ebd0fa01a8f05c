// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the player widget.

pub mod overlay;
