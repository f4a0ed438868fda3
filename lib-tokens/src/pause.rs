//! Pause Gate
//!
//! Emergency switch that blocks transfers while set.

use serde::{Deserialize, Serialize};

use crate::errors::{TokenError, TokenResult};

/// Whether transfers are currently blocked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseGate {
    paused: bool,
}

impl PauseGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Fail with [`TokenError::Paused`] while paused
    pub fn ensure_open(&self) -> TokenResult<()> {
        if self.paused {
            return Err(TokenError::Paused);
        }
        Ok(())
    }

    pub fn pause(&mut self) -> TokenResult<()> {
        if self.paused {
            return Err(TokenError::AlreadyPaused);
        }
        self.paused = true;
        Ok(())
    }

    pub fn unpause(&mut self) -> TokenResult<()> {
        if !self.paused {
            return Err(TokenError::NotPaused);
        }
        self.paused = false;
        Ok(())
    }
}
