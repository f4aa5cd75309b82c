//! Time subsystem.
//!
//! Frame scheduling stays with the host (browser animation frames, a native
//! event loop, tests). The host feeds timestamps into a [`Ticker`], which turns
//! them into fixed-step updates plus one render call per frame.

mod ticker;

pub use ticker::{TickHandler, Ticker};
