use std::time::Duration;

/// Deferred actions of the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires a single tap unless a second tap arrives first.
    DoubleTap,
    /// Re-snaps the pager if the platform did not glide after release.
    GlideAlways,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub kind: TimerKind,
    pub armed_at: Duration,
    pub due: Duration,
}

/// At most one pending timer per kind, fired by polling with the clock.
#[derive(Clone, Debug, Default)]
pub struct Timers {
    pending: Vec<Timer>,
}

impl Timers {
    /// Arm `kind` to fire `delay` after `now`, replacing any pending one.
    pub fn schedule(&mut self, kind: TimerKind, now: Duration, delay: Duration) {
        self.cancel(kind);
        self.pending.push(Timer {
            kind,
            armed_at: now,
            due: now + delay,
        });
    }

    pub fn cancel(&mut self, kind: TimerKind) -> Option<Timer> {
        let pos = self.pending.iter().position(|t| t.kind == kind)?;
        Some(self.pending.swap_remove(pos))
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Remove and return the earliest timer due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Timer> {
        let pos = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| t.due)
            .map(|(i, _)| i)?;
        Some(self.pending.swap_remove(pos))
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|t| t.kind == kind)
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|t| t.due).min()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
