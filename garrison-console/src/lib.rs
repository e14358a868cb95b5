//! Garrison Console library
//!
//! This crate contains the admin console's library surfaces used by the
//! executable in `src/main.rs`. Modules here are primarily application glue:
//! the roster state machine, its reducer, views, and the API infrastructure.
//!
//! Notes
//! - Public items are subject to change while the console stabilizes.
//! - Most consumers should use the `garrison-console` binary; the library is
//!   exposed mainly to enable testing and internal reuse.

pub mod app;
pub mod errors;
pub mod infrastructure;
pub mod message;
pub mod state;
pub mod theme;
pub mod toast;
pub mod update;
pub mod updates;
pub mod view;
pub mod views;
