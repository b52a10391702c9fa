use crate::progress::FillBasis;
use serde::Serialize;
use static_assertions::assert_obj_safe;
use std::fmt::{Display, Formatter};

/// The parts of the player UI the controller writes to or measures.
pub trait PlayerView {
	fn set_toggle_glyph(&self, glyph: ToggleGlyph);
	fn set_fill_basis(&self, basis: FillBasis);
	/// Rendered width of the progress track in pixels.
	fn track_width(&self) -> f64;
}

assert_obj_safe!(PlayerView);

/// Glyph shown on the play/pause toggle. It shows the action a click would perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleGlyph {
	/// Media is paused, a click starts it.
	Play,
	/// Media is playing, a click pauses it.
	Pause,
}

impl ToggleGlyph {
	pub fn for_paused_state(paused: bool) -> Self {
		if paused {
			ToggleGlyph::Play
		} else {
			ToggleGlyph::Pause
		}
	}

	pub fn symbol(self) -> &'static str {
		match self {
			ToggleGlyph::Play => "►",
			ToggleGlyph::Pause => "❚ ❚",
		}
	}
}

impl Display for ToggleGlyph {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		formatter.write_str(self.symbol())
	}
}
