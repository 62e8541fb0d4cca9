// Copyright 2026 the Lightwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pull-to-refresh state machine.

/// Tunable constants for pull-to-refresh.
///
/// Distances are logical pixels of raw finger travel before damping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefreshConfig {
    /// Damped pull distance at which a release triggers a refresh.
    pub activation_threshold: f64,
    /// Multiplier applied to raw finger travel; below 1.0 the indicator
    /// lags the finger, which reads as elastic resistance.
    pub damping: f64,
    /// Cap on the damped pull distance.
    pub max_pull: f64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            activation_threshold: 80.0,
            damping: 0.5,
            max_pull: 160.0,
        }
    }
}

/// Phase of the refresh controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    /// No pull in progress.
    Idle,
    /// A finger is pulling past the top edge.
    Pulling,
    /// The host's refresh callback is in flight; further pulls are ignored
    /// until [`RefreshController::settle`].
    Refreshing,
}

/// What the host must do after [`RefreshController::release`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Progress reached 1.0: invoke the refresh callback, then call
    /// [`RefreshController::settle`] when it completes either way.
    StartRefresh,
    /// Progress fell short: animate the indicator back; the controller is
    /// already idle.
    SnapBack,
}

/// Drives an overscroll pull into a refresh action with progress feedback.
///
/// The controller is only armed while the scroll container is at its top
/// edge ([`RefreshController::begin`] with `at_top == false` is inert), and
/// it ignores pulls while a refresh is in flight.
#[derive(Debug)]
pub struct RefreshController {
    config: RefreshConfig,
    state: RefreshState,
    raw_pull: f64,
}

impl Default for RefreshController {
    fn default() -> Self {
        Self::new(RefreshConfig::default())
    }
}

impl RefreshController {
    /// Creates a controller with the given configuration.
    #[must_use]
    pub const fn new(config: RefreshConfig) -> Self {
        Self {
            config,
            state: RefreshState::Idle,
            raw_pull: 0.0,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &RefreshConfig {
        &self.config
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> RefreshState {
        self.state
    }

    /// Returns `true` while the refresh callback is in flight.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.state == RefreshState::Refreshing
    }

    /// The damped pull distance in logical pixels, for indicator rendering.
    #[must_use]
    pub fn pull_distance(&self) -> f64 {
        (self.raw_pull * self.config.damping).min(self.config.max_pull)
    }

    /// Pull progress toward activation, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.config.activation_threshold <= 0.0 {
            return 1.0;
        }
        (self.pull_distance() / self.config.activation_threshold).clamp(0.0, 1.0)
    }

    /// Starts a pull session if the container is at its top edge.
    ///
    /// Returns `true` if a session started. Inert away from the top edge and
    /// while a refresh is in flight.
    pub fn begin(&mut self, at_top: bool) -> bool {
        if !at_top || self.state != RefreshState::Idle {
            return false;
        }
        self.state = RefreshState::Pulling;
        self.raw_pull = 0.0;
        true
    }

    /// Accumulates raw vertical finger travel (positive = downward).
    ///
    /// Returns the updated progress. Ignored outside [`RefreshState::Pulling`].
    pub fn pull(&mut self, raw_dy: f64) -> f64 {
        if self.state == RefreshState::Pulling && raw_dy.is_finite() {
            self.raw_pull = (self.raw_pull + raw_dy).max(0.0);
        }
        self.progress()
    }

    /// Ends the pull session and reports what the host must do.
    ///
    /// Past the activation threshold the controller enters
    /// [`RefreshState::Refreshing`]; otherwise it snaps back to idle with the
    /// pull distance reset.
    pub fn release(&mut self) -> Release {
        if self.state != RefreshState::Pulling {
            return Release::SnapBack;
        }
        if self.progress() >= 1.0 {
            self.state = RefreshState::Refreshing;
            Release::StartRefresh
        } else {
            self.state = RefreshState::Idle;
            self.raw_pull = 0.0;
            Release::SnapBack
        }
    }

    /// The finally-equivalent exit from [`RefreshState::Refreshing`].
    ///
    /// Hosts call this when the refresh callback completes, resolved or
    /// rejected; the controller returns to idle with the pull distance reset
    /// in both cases.
    pub fn settle(&mut self) {
        self.state = RefreshState::Idle;
        self.raw_pull = 0.0;
    }

    /// Host-driven teardown from any state (e.g. unmount).
    pub fn abort(&mut self) {
        self.settle();
    }
}
