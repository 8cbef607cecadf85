use super::*;

#[derive(Default)]
struct MockScheduler {
    next: u64,
    requested: Vec<FrameToken>,
    cancelled: Vec<FrameToken>,
}

impl FrameScheduler for MockScheduler {
    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.next);
        self.next += 1;
        self.requested.push(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.cancelled.push(token);
    }
}

#[test]
fn start_schedules_exactly_one_frame() {
    let mut sched = MockScheduler::default();
    let mut looper = LoopController::new();
    assert_eq!(looper.state(), LoopState::Stopped);

    assert!(looper.start(&mut sched));
    assert!(looper.is_running());
    assert_eq!(sched.requested.len(), 1);
    assert_eq!(looper.pending(), Some(sched.requested[0]));
}

#[test]
fn start_while_running_is_a_guarded_no_op() {
    let mut sched = MockScheduler::default();
    let mut looper = LoopController::new();

    assert!(looper.start(&mut sched));
    assert!(!looper.start(&mut sched));
    assert!(!looper.start(&mut sched));
    // Never more than one callback in flight.
    assert_eq!(sched.requested.len(), 1);
}

#[test]
fn stop_cancels_the_pending_callback_and_is_idempotent() {
    let mut sched = MockScheduler::default();
    let mut looper = LoopController::new();
    looper.start(&mut sched);
    let token = looper.pending().unwrap();

    looper.stop(&mut sched);
    assert_eq!(looper.state(), LoopState::Stopped);
    assert_eq!(looper.pending(), None);
    assert_eq!(sched.cancelled, vec![token]);

    looper.stop(&mut sched);
    looper.stop(&mut sched);
    assert_eq!(sched.cancelled.len(), 1);
}

#[test]
fn stop_before_start_is_safe() {
    let mut sched = MockScheduler::default();
    let mut looper = LoopController::new();
    looper.stop(&mut sched);
    assert_eq!(looper.state(), LoopState::Stopped);
    assert!(sched.cancelled.is_empty());
}

#[test]
fn stale_and_foreign_tokens_are_rejected() {
    let mut sched = MockScheduler::default();
    let mut looper = LoopController::new();
    looper.start(&mut sched);
    let token = looper.pending().unwrap();

    assert!(!looper.acknowledge_frame(FrameToken(9999)));
    assert!(looper.acknowledge_frame(token));
    // The same token fired twice: the second one is stale.
    assert!(!looper.acknowledge_frame(token));
}

#[test]
fn acknowledgement_while_stopped_is_rejected() {
    let mut sched = MockScheduler::default();
    let mut looper = LoopController::new();
    looper.start(&mut sched);
    let token = looper.pending().unwrap();
    looper.stop(&mut sched);

    assert!(!looper.acknowledge_frame(token));
}

#[test]
fn reschedule_continues_the_cycle_only_while_running() {
    let mut sched = MockScheduler::default();
    let mut looper = LoopController::new();
    looper.start(&mut sched);
    let first = looper.pending().unwrap();

    assert!(looper.acknowledge_frame(first));
    looper.reschedule(&mut sched);
    assert_eq!(sched.requested.len(), 2);
    assert_ne!(looper.pending(), Some(first));

    looper.stop(&mut sched);
    looper.reschedule(&mut sched);
    assert_eq!(sched.requested.len(), 2);
}

#[test]
fn reschedule_never_stacks_a_second_pending_frame() {
    let mut sched = MockScheduler::default();
    let mut looper = LoopController::new();
    looper.start(&mut sched);

    looper.reschedule(&mut sched);
    assert_eq!(sched.requested.len(), 1);
}
