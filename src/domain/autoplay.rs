//! Autoplay sub-state machine
//!
//! Autoplay is an orthogonal layer over an active carousel: it can be
//! enabled or disabled by the owning view, and temporarily suspended while
//! the user is interacting (hover, drag) without losing the enabled flag.
//! Each transition reports the timer action the owner must carry out, so
//! the timing side effects stay out of this module entirely.

/// Observable autoplay state, derived from the two underlying flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayStatus {
    /// Autoplay is disabled
    Stopped,
    /// Autoplay is enabled and ticking
    Running,
    /// Autoplay is enabled but paused by user interaction
    Suspended,
}

/// Timer action the owner must perform after a transition
///
/// `Start` always means a fresh full-length interval; there is no
/// resumption of partially elapsed time anywhere in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Nothing to do
    Noop,
    /// Start a timer with a fresh full interval
    Start,
    /// Cancel the pending tick immediately
    Cancel,
    /// Cancel the pending tick and start over with a fresh interval
    Restart,
}

/// Enabled/suspended flags with idempotent transitions
///
/// Suspension is tracked even while autoplay is disabled, because other
/// input paths (scroll-driven navigation) consult it independently of any
/// timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Autoplay {
    enabled: bool,
    suspended: bool,
}

impl Autoplay {
    /// Creates autoplay state with the timer disabled and no suspension
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the derived status
    pub fn status(&self) -> AutoplayStatus {
        if !self.enabled {
            AutoplayStatus::Stopped
        } else if self.suspended {
            AutoplayStatus::Suspended
        } else {
            AutoplayStatus::Running
        }
    }

    /// Returns true while user interaction holds the carousel
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Enables autoplay
    ///
    /// Idempotent: enabling while already enabled commands nothing, so the
    /// owner never ends up with a duplicate timer. Enabling during a
    /// suspension records intent only; the timer starts on `resume`.
    pub fn enable(&mut self) -> TimerCommand {
        if self.enabled {
            return TimerCommand::Noop;
        }
        self.enabled = true;
        if self.suspended {
            TimerCommand::Noop
        } else {
            TimerCommand::Start
        }
    }

    /// Disables autoplay, cancelling any pending tick
    pub fn disable(&mut self) -> TimerCommand {
        if !self.enabled {
            return TimerCommand::Noop;
        }
        let was_running = !self.suspended;
        self.enabled = false;
        if was_running {
            TimerCommand::Cancel
        } else {
            TimerCommand::Noop
        }
    }

    /// Suspends ticking for the duration of a user interaction
    ///
    /// Does not clear the enabled flag. Suspending while already suspended
    /// is a no-op.
    pub fn suspend(&mut self) -> TimerCommand {
        if self.suspended {
            return TimerCommand::Noop;
        }
        self.suspended = true;
        if self.enabled {
            TimerCommand::Cancel
        } else {
            TimerCommand::Noop
        }
    }

    /// Ends a suspension
    ///
    /// Restarts the timer from a fresh full interval when autoplay is
    /// enabled. Resuming while not suspended is a no-op.
    pub fn resume(&mut self) -> TimerCommand {
        if !self.suspended {
            return TimerCommand::Noop;
        }
        self.suspended = false;
        if self.enabled {
            TimerCommand::Start
        } else {
            TimerCommand::Noop
        }
    }

    /// Reports the timer action for a manual navigation
    ///
    /// With `reset_phase` set, a running timer restarts so the next tick
    /// lands a full interval after the manual step. Otherwise the pending
    /// tick keeps its originally scheduled time.
    pub fn manual_nav(&self, reset_phase: bool) -> TimerCommand {
        if reset_phase && self.status() == AutoplayStatus::Running {
            TimerCommand::Restart
        } else {
            TimerCommand::Noop
        }
    }
}
