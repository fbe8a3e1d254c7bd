//! Two-tier camera acquisition.
//!
//! Strategies are tried in order: the environment-facing preferred tier,
//! then one generic unconstrained request. Never more than one fallback.

use crate::error::{Error, Result};
use crate::{overlay_debug, overlay_warn};
use super::stream::{StreamConstraints, VideoSource, VideoStream};

/// Ordered constraint tiers tried during acquisition.
pub fn acquisition_tiers() -> Vec<StreamConstraints> {
    vec![
        StreamConstraints::environment_preferred(),
        StreamConstraints::any(),
    ]
}

/// Acquire a stream from the source, walking the constraint tiers in order
/// until one succeeds.
///
/// On an unsupported backend this fails immediately with `Unsupported`.
/// Otherwise the error of the last tier is what surfaces.
pub fn acquire_stream(source: &mut dyn VideoSource) -> Result<Box<dyn VideoStream>> {
    if !source.is_supported() {
        return Err(Error::Unsupported(
            "this backend does not provide camera capture".to_string(),
        ));
    }

    let tiers = acquisition_tiers();
    let tier_count = tiers.len();
    let mut last_error = None;

    for (index, constraints) in tiers.into_iter().enumerate() {
        overlay_debug!(
            "aroverlay::capture",
            "requesting stream (tier {}/{}): {:?}",
            index + 1,
            tier_count,
            constraints
        );

        match source.open(&constraints) {
            Ok(stream) => return Ok(stream),
            Err(err) => {
                if index + 1 < tier_count {
                    overlay_warn!(
                        "aroverlay::capture",
                        "constraint tier failed ({}), retrying with generic request",
                        err
                    );
                }
                last_error = Some(err);
            }
        }
    }

    Err(last_error.unwrap_or(Error::NoDeviceFound))
}

#[cfg(test)]
#[path = "acquisition_tests.rs"]
mod tests;
