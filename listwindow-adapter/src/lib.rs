//! Adapter utilities for the `listwindow` crate.
//!
//! The `listwindow` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides the host-side pieces around an actual scroll container:
//!
//! - The [`ScrollSurface`] seam the host implements for its scrollable element
//! - A mounted [`SurfaceController`] that tracks scroll events (with settle debouncing),
//!   issues programmatic scroll-to-item commands, and wires up pagination polling
//! - An adapter-driven smooth-motion fallback for surfaces without native smooth scrolling
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod motion;
mod surface;


pub use controller::SurfaceController;
pub use motion::{Easing, SmoothMotion};
pub use surface::{ScrollBehavior, ScrollSurface};
