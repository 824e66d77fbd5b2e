//! Cooperative Ctrl+C handling.
//!
//! A single SIGINT handler is installed per process. While a guard is
//! *armed* an interrupt only sets a flag that the running loop polls between
//! steps. When nothing is armed the process exits with status 130, the same
//! status a shell reports for a process killed by SIGINT.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

/// Exit status used when Ctrl+C arrives outside an armed section.
pub const SIGINT_EXIT_CODE: i32 = 130;

/// Shared interrupt state. Clones observe the same flags.
#[derive(Debug, Clone, Default)]
pub struct InterruptGuard {
    armed: Arc<AtomicBool>,
    interrupted: Arc<AtomicBool>,
}

impl InterruptGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the Ctrl+C handler.
    ///
    /// Safe to call more than once; only the first registration in a process
    /// takes effect.
    pub fn register_signal_handler(&self) {
        let guard = self.clone();
        ctrlc::set_handler(move || {
            if !guard.interrupt() {
                std::process::exit(SIGINT_EXIT_CODE);
            }
        })
        .ok(); // Ignore if handler already set
    }

    /// Record an interrupt. Returns `false` when nothing is armed to receive it.
    pub fn interrupt(&self) -> bool {
        if self.armed.load(Ordering::SeqCst) {
            self.interrupted.store(true, Ordering::SeqCst);
            debug!("Interrupt received by armed section");
            true
        } else {
            false
        }
    }

    /// Whether an interrupt arrived since the current section was armed.
    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    /// Arm the guard until the returned scope is dropped.
    ///
    /// Any interrupt left over from a previous section is cleared.
    pub fn arm(&self) -> ArmedScope<'_> {
        self.interrupted.store(false, Ordering::SeqCst);
        self.armed.store(true, Ordering::SeqCst);
        ArmedScope { guard: self }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }
}

/// Disarms its guard on drop.
#[derive(Debug)]
pub struct ArmedScope<'a> {
    guard: &'a InterruptGuard,
}

impl ArmedScope<'_> {
    pub fn is_interrupted(&self) -> bool {
        self.guard.is_interrupted()
    }
}

impl Drop for ArmedScope<'_> {
    fn drop(&mut self) {
        self.guard.armed.store(false, Ordering::SeqCst);
    }
}
