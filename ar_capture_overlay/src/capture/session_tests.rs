//! Unit tests for session.rs
//!
//! Validates exclusive stream ownership, idempotent stop, and the
//! stopped-session error paths.

use crate::error::Error;
use super::super::acquisition::acquire_stream;
use super::super::mock_stream::MockVideoSource;
use super::*;

fn live_session(source: &mut MockVideoSource) -> CaptureSession {
    let stream = acquire_stream(source).unwrap();
    CaptureSession::new(stream)
}

#[test]
fn test_new_session_is_live() {
    let mut source = MockVideoSource::working();
    let session = live_session(&mut source);

    assert!(session.is_live());
    assert_eq!(session.resolution(), Some((320, 240)));
}

#[test]
fn test_session_serves_frames() {
    let mut source = MockVideoSource::working();
    let mut session = live_session(&mut source);

    let frame = session.frame().unwrap();
    assert_eq!(frame.dimensions(), (320, 240));
    assert_eq!(source.probe.lock().unwrap().frame_calls, 1);
}

#[test]
fn test_stop_releases_tracks() {
    let mut source = MockVideoSource::working();
    let mut session = live_session(&mut source);

    session.stop();
    assert!(!session.is_live());
    assert_eq!(session.resolution(), None);
    assert_eq!(source.probe.lock().unwrap().stop_calls, 1);
}

#[test]
fn test_stop_is_idempotent() {
    let mut source = MockVideoSource::working();
    let mut session = live_session(&mut source);

    session.stop();
    session.stop();
    assert_eq!(source.probe.lock().unwrap().stop_calls, 1);
}

#[test]
fn test_stopped_session_rejects_frame_and_play() {
    let mut source = MockVideoSource::working();
    let mut session = live_session(&mut source);
    session.stop();

    assert!(matches!(session.frame(), Err(Error::InvalidState(_))));
    assert!(matches!(session.play(), Err(Error::InvalidState(_))));
}

#[test]
fn test_drop_stops_live_stream() {
    let mut source = MockVideoSource::working();
    {
        let _session = live_session(&mut source);
    }
    assert_eq!(source.probe.lock().unwrap().stop_calls, 1);
}
