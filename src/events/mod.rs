//! Event handling for Tradepulse.
//!
//! This module turns terminal input into [`Action`](crate::state::Action)s.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, Modifiers};
