//! Mock VideoSource/VideoStream for unit tests (no camera required)
//!
//! The mock source scripts a per-tier outcome so acquisition fallback paths
//! can be exercised deterministically. The mock stream serves a solid-color
//! frame fixture and counts track stops.

use std::sync::{Arc, Mutex};
use image::{Rgb, RgbImage};
use crate::error::{Error, Result};
use super::stream::{StreamConstraints, VideoSource, VideoStream};

/// Scripted outcome for a single constraint tier.
#[derive(Clone)]
pub enum TierOutcome {
    /// Open succeeds with a stream of the given resolution
    Succeed(u32, u32),
    /// Open fails with the given error
    Fail(Error),
}

/// Shared counters observed by tests after the overlay consumed the stream.
#[derive(Default)]
pub struct StreamProbe {
    pub stop_calls: usize,
    pub play_calls: usize,
    pub frame_calls: usize,
}

/// Mock camera backend with scripted per-tier outcomes.
pub struct MockVideoSource {
    outcomes: Vec<TierOutcome>,
    supported: bool,
    /// Constraints seen by open(), in order
    pub requests: Vec<StreamConstraints>,
    /// Probe shared with every stream this source hands out
    pub probe: Arc<Mutex<StreamProbe>>,
    /// When set, play() on handed-out streams fails with PlaybackBlocked
    pub block_playback: bool,
}

impl MockVideoSource {
    pub fn new(outcomes: Vec<TierOutcome>) -> Self {
        Self {
            outcomes,
            supported: true,
            requests: Vec::new(),
            probe: Arc::new(Mutex::new(StreamProbe::default())),
            block_playback: false,
        }
    }

    /// A source that succeeds on the first tier with a 320x240 stream.
    pub fn working() -> Self {
        Self::new(vec![TierOutcome::Succeed(320, 240)])
    }

    /// A source whose backend reports no capture support at all.
    pub fn unsupported() -> Self {
        let mut source = Self::new(vec![]);
        source.supported = false;
        source
    }
}

impl VideoSource for MockVideoSource {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn open(&mut self, constraints: &StreamConstraints) -> Result<Box<dyn VideoStream>> {
        let tier = self.requests.len();
        self.requests.push(constraints.clone());

        match self.outcomes.get(tier).cloned() {
            Some(TierOutcome::Succeed(width, height)) => Ok(Box::new(MockVideoStream {
                width,
                height,
                probe: self.probe.clone(),
                block_playback: self.block_playback,
                stopped: false,
            })),
            Some(TierOutcome::Fail(err)) => Err(err),
            None => Err(Error::NoDeviceFound),
        }
    }
}

/// Mock camera stream serving a solid mid-gray frame.
pub struct MockVideoStream {
    width: u32,
    height: u32,
    probe: Arc<Mutex<StreamProbe>>,
    block_playback: bool,
    stopped: bool,
}

impl VideoStream for MockVideoStream {
    fn play(&mut self) -> Result<()> {
        self.probe.lock().unwrap().play_calls += 1;
        if self.block_playback {
            Err(Error::PlaybackBlocked)
        } else {
            Ok(())
        }
    }

    fn frame(&mut self) -> Result<RgbImage> {
        if self.stopped {
            return Err(Error::InvalidState("stream stopped".to_string()));
        }
        self.probe.lock().unwrap().frame_calls += 1;
        Ok(RgbImage::from_pixel(
            self.width,
            self.height,
            Rgb([128, 128, 128]),
        ))
    }

    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.probe.lock().unwrap().stop_calls += 1;
        }
    }
}
