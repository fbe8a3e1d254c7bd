//! Unit tests for frame_scheduler.rs

use super::*;

#[test]
fn test_new_scheduler_has_no_pending_tasks() {
    let scheduler = FrameScheduler::new();
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn test_request_frame_returns_pending_handle() {
    let mut scheduler = FrameScheduler::new();
    let key = scheduler.request_frame();
    assert!(scheduler.is_pending(key));
    assert_eq!(scheduler.pending_count(), 1);
}

#[test]
fn test_take_consumes_handle() {
    let mut scheduler = FrameScheduler::new();
    let key = scheduler.request_frame();
    assert!(scheduler.take(key));
    assert!(!scheduler.is_pending(key));
    assert_eq!(scheduler.pending_count(), 0);
    // A consumed handle cannot be taken again
    assert!(!scheduler.take(key));
}

#[test]
fn test_cancel_is_idempotent() {
    let mut scheduler = FrameScheduler::new();
    let key = scheduler.request_frame();
    assert!(scheduler.cancel(key));
    assert!(!scheduler.cancel(key));
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn test_cancelled_handle_is_not_taken() {
    let mut scheduler = FrameScheduler::new();
    let key = scheduler.request_frame();
    scheduler.cancel(key);
    assert!(!scheduler.take(key));
}

#[test]
fn test_stale_handle_does_not_match_new_task() {
    let mut scheduler = FrameScheduler::new();
    let old = scheduler.request_frame();
    scheduler.cancel(old);

    // A new task reusing the slot gets a different generation
    let fresh = scheduler.request_frame();
    assert_ne!(old, fresh);
    assert!(!scheduler.is_pending(old));
    assert!(scheduler.is_pending(fresh));
}

#[test]
fn test_reschedule_chain() {
    let mut scheduler = FrameScheduler::new();
    let mut handle = scheduler.request_frame();
    // Simulate three frames of the self-rescheduling chain
    for _ in 0..3 {
        assert!(scheduler.take(handle));
        handle = scheduler.request_frame();
    }
    assert_eq!(scheduler.pending_count(), 1);
    scheduler.cancel(handle);
    assert_eq!(scheduler.pending_count(), 0);
}
