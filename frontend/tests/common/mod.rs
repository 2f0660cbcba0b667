//! Status-bar test doubles shared by the integration tests.

#![allow(dead_code)]

use powerlift_frontend::error::ThemeError;
use powerlift_frontend::theme::{StatusBarHost, StatusBarStyle};
use std::cell::{Cell, RefCell};

/// Records every style written to it.
#[derive(Default)]
pub struct RecordingHost {
    pub applied: RefCell<Vec<StatusBarStyle>>,
}

impl RecordingHost {
    pub fn writes(&self) -> usize {
        self.applied.borrow().len()
    }

    pub fn last(&self) -> Option<StatusBarStyle> {
        self.applied.borrow().last().copied()
    }
}

impl StatusBarHost for RecordingHost {
    fn apply_status_bar(&self, style: StatusBarStyle) -> Result<(), ThemeError> {
        self.applied.borrow_mut().push(style);
        Ok(())
    }
}

/// A host whose window never resolves.
pub struct DetachedHost;

impl StatusBarHost for DetachedHost {
    fn apply_status_bar(&self, _style: StatusBarStyle) -> Result<(), ThemeError> {
        Err(ThemeError::WindowUnavailable("no activity attached".to_string()))
    }
}

/// Accepts every write, then reports it failed later, like a webview whose
/// script errors after the call returned.
#[derive(Default)]
pub struct FlakyHost {
    pub inner: RecordingHost,
    pub failed: Cell<u32>,
}

impl FlakyHost {
    pub fn fail_last_write(&self) {
        self.failed.set(self.failed.get() + 1);
    }
}

impl StatusBarHost for FlakyHost {
    fn apply_status_bar(&self, style: StatusBarStyle) -> Result<(), ThemeError> {
        self.inner.apply_status_bar(style)
    }

    fn failed_writes(&self) -> u32 {
        self.failed.get()
    }
}
