/// Opaque handle for one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// The host environment's per-frame callback scheduler.
///
/// The engine never spins its own thread or timer; it asks the host for the
/// next frame callback and the host calls back into the engine when that
/// frame fires. Cancelling an already-fired or unknown token must be a safe
/// no-op.
pub trait FrameScheduler {
    /// Request one frame callback; returns the token identifying it.
    fn request_frame(&mut self) -> FrameToken;

    /// Cancel a previously requested callback, if still pending.
    fn cancel_frame(&mut self, token: FrameToken);
}

/// Loop controller state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    /// No draw cycle scheduled.
    #[default]
    Stopped,
    /// A draw cycle is scheduled (or currently executing).
    Running,
}

/// Owns the single continuously-rescheduled draw cycle.
///
/// At most one frame callback is ever pending: `start` while running is a
/// guarded no-op, and frame acknowledgements are matched against the pending
/// token so a stale callback can never produce a second concurrent cycle.
#[derive(Debug, Default)]
pub struct LoopController {
    state: LoopState,
    pending: Option<FrameToken>,
}

impl LoopController {
    /// A controller in the `Stopped` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// True while a draw cycle is scheduled.
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Token of the pending frame callback, if any.
    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Transition `Stopped -> Running` and request the first frame.
    ///
    /// Returns false (and schedules nothing) if already running; two
    /// concurrent draw cycles on one surface are never allowed.
    pub fn start(&mut self, sched: &mut dyn FrameScheduler) -> bool {
        if self.is_running() {
            tracing::debug!("loop already running; start ignored");
            return false;
        }
        self.state = LoopState::Running;
        self.pending = Some(sched.request_frame());
        true
    }

    /// Transition to `Stopped`, cancelling the pending callback if any.
    ///
    /// Idempotent: callable from any state, any number of times.
    pub fn stop(&mut self, sched: &mut dyn FrameScheduler) {
        if let Some(token) = self.pending.take() {
            sched.cancel_frame(token);
        }
        self.state = LoopState::Stopped;
    }

    /// Consume the pending token when the host's frame callback fires.
    ///
    /// Returns false for stale or foreign tokens and while stopped; the
    /// caller must skip the tick in that case.
    pub fn acknowledge_frame(&mut self, token: FrameToken) -> bool {
        if !self.is_running() || self.pending != Some(token) {
            return false;
        }
        self.pending = None;
        true
    }

    /// Request the next frame at the end of a tick, if still running.
    pub fn reschedule(&mut self, sched: &mut dyn FrameScheduler) {
        if self.is_running() && self.pending.is_none() {
            self.pending = Some(sched.request_frame());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/looper.rs"]
mod tests;
