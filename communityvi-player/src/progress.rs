use serde::{Serialize, Serializer};

/// Flex basis of the progress fill indicator, in percent of the track.
///
/// Renders the way CSS expects it, e.g. `50%`.
#[derive(derive_more::Display, Clone, Copy, Debug, PartialEq)]
#[display("{_0}%")]
pub struct FillBasis(f64);

impl FillBasis {
	pub const EMPTY: FillBasis = FillBasis(0.0);
}

impl Serialize for FillBasis {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

/// Returns the duration if it can be divided by, `None` while it is unknown (`NaN`), infinite (live streams)
/// or zero.
pub fn known_duration(duration: f64) -> Option<f64> {
	(duration.is_finite() && duration > 0.0).then_some(duration)
}

/// Elapsed share of the medium. Not clamped, a position past the end yields more than 100%.
pub fn fill_basis(position: f64, duration: f64) -> Option<FillBasis> {
	let duration = known_duration(duration)?;
	let percent = (position / duration) * 100.0;
	percent.is_finite().then_some(FillBasis(percent))
}

/// Position that corresponds to a pointer `offset_x` pixels into a track that is `track_width` pixels wide.
pub fn scrub_target(offset_x: f64, track_width: f64, duration: f64) -> Option<f64> {
	if !(track_width.is_finite() && track_width > 0.0) {
		return None;
	}
	let duration = known_duration(duration)?;
	let target = (offset_x / track_width) * duration;
	target.is_finite().then_some(target)
}

/// Clamps a seek target into the medium. Positions are left alone while the duration is unknown.
pub fn clamp_position(target: f64, duration: f64) -> f64 {
	match known_duration(duration) {
		Some(duration) => target.clamp(0.0, duration),
		None => target.max(0.0),
	}
}
