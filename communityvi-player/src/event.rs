use serde::{Deserialize, Serialize};

/// Everything the player controller reacts to: UI events on the controls and notifications from the media
/// element.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum PlayerEvent {
	MediaClicked,
	ToggleClicked,
	Played,
	Paused,
	TimeUpdated,
	SkipClicked(SkipClickedEvent),
	RangeChanged(RangeEvent),
	RangeMouseMoved(RangeEvent),
	ProgressClicked(PointerEvent),
	ProgressMouseDown,
	ProgressMouseUp,
	ProgressMouseMoved(PointerEvent),
	MediaFailed(MediaFailedEvent),
}

macro_rules! player_event_from_struct {
	($enum_case: ident, $struct_type: ty) => {
		impl From<$struct_type> for PlayerEvent {
			fn from(event: $struct_type) -> PlayerEvent {
				PlayerEvent::$enum_case(event)
			}
		}
	};
}

/// Click on a skip control. `amount` is the raw `data-skip` attribute, `None` if the control has none.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SkipClickedEvent {
	pub amount: Option<String>,
}

player_event_from_struct!(SkipClicked, SkipClickedEvent);

/// A slider's `name` and its current, unparsed `value`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RangeEvent {
	pub name: String,
	pub value: String,
}

/// Pointer position relative to the progress track's left edge.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct PointerEvent {
	pub offset_x: f64,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct MediaFailedEvent {
	#[serde(default)]
	pub message: Option<String>,
}

player_event_from_struct!(MediaFailed, MediaFailedEvent);

impl PlayerEvent {
	pub fn skip(amount: impl Into<String>) -> Self {
		SkipClickedEvent {
			amount: Some(amount.into()),
		}
		.into()
	}

	pub fn range_changed(name: impl Into<String>, value: impl Into<String>) -> Self {
		PlayerEvent::RangeChanged(RangeEvent {
			name: name.into(),
			value: value.into(),
		})
	}

	pub fn progress_clicked(offset_x: f64) -> Self {
		PlayerEvent::ProgressClicked(PointerEvent { offset_x })
	}

	pub fn progress_mouse_moved(offset_x: f64) -> Self {
		PlayerEvent::ProgressMouseMoved(PointerEvent { offset_x })
	}
}
