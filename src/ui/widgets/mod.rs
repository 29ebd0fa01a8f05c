// SPDX-License-Identifier: MPL-2.0
pub mod visibility_probe;

pub use visibility_probe::{visibility_probe, Geometry, ProbeEvent, VisibilityProbe};
