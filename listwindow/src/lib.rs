//! A headless windowed list rendering engine.
//!
//! For host-side utilities (scroll surfaces, smooth motion), see the `listwindow-adapter` crate.
//!
//! This crate computes *which* indices of a large uniform-height list are renderable and *where*
//! they sit inside a full-height scroll container: overscanned render windows, exact scroll
//! geometry (`total_height`, `offset_y`), scroll settling, and a trailing-threshold trigger for
//! infinite pagination.
//!
//! It is UI-agnostic and owns no data. A host layer is expected to provide:
//! - viewport height and uniform item height
//! - scroll offsets (and timestamps for settle debouncing)
//! - the item collection itself and any page fetching
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod options;
mod pagination;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use error::GeometryError;
pub use options::{FetchNextPage, OnChangeCallback, WindowOptions};
pub use pagination::{FETCH_MARGIN, should_request_next_page};
pub use state::ScrollState;
pub use types::RenderWindow;
pub use window::ListWindow;
