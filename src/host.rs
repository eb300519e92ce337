//! Host runtime integration.
//!
//! The client runs inside a host that owns the screen and hands over an
//! opaque, already authenticated identity. The terminal is that host here.

use crate::config::Config;
use crate::error::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;

/// What the client needs from its embedding host.
pub trait HostRuntime {
    /// Take over the full viewport.
    fn expand(&mut self) -> Result<()>;

    /// Give the viewport back. Safe to call more than once.
    fn restore(&mut self);

    /// Opaque credential attached to every backend request.
    fn init_data(&self) -> &str;
}

/// Terminal host: raw mode plus the alternate screen.
pub struct TerminalHost {
    init_data: String,
    mouse_capture: bool,
    expanded: bool,
}

impl TerminalHost {
    /// Create a host from configuration. Nothing touches the terminal until
    /// [`expand`](HostRuntime::expand).
    pub fn new(config: &Config) -> Self {
        Self {
            init_data: config.identity.init_data.clone(),
            mouse_capture: config.ui.mouse_support,
            expanded: false,
        }
    }
}

impl HostRuntime for TerminalHost {
    fn expand(&mut self) -> Result<()> {
        if self.expanded {
            return Ok(());
        }
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if self.mouse_capture {
            execute!(stdout, EnableMouseCapture)?;
        }
        self.expanded = true;
        Ok(())
    }

    fn restore(&mut self) {
        if !self.expanded {
            return;
        }
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if self.mouse_capture {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, LeaveAlternateScreen);
        self.expanded = false;
    }

    fn init_data(&self) -> &str {
        &self.init_data
    }
}

impl Drop for TerminalHost {
    fn drop(&mut self) {
        self.restore();
    }
}
