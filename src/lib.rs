//! # Tradepulse
//!
//! A terminal client for a binary up/down price betting game. It polls a
//! small HTTP backend for the current balance, a short price history, the
//! open bets on each side and recently settled bets, and lets the user stake
//! an amount on the next move.
//!
//! ## Architecture
//!
//! - **App**: Event loop and lifecycle
//! - **Host**: Screen ownership and the opaque identity credential
//! - **API**: Typed HTTP client for the backend endpoints
//! - **Sync**: Background refreshers, the poll scheduler, and trade submission
//! - **State**: Single store reduced from actions
//! - **UI**: Layout and rendering
//! - **Events**: Key handling
//! - **Config**: File and environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod state;
pub mod sync;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use host::{HostRuntime, TerminalHost};
pub use sync::{Scheduler, SyncEngine};
