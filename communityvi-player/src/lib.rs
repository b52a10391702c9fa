//! Player controls for communityvi: binds the play/pause toggle, skip buttons, sliders and the progress bar to a
//! media element.

#[cfg(not(target_arch = "wasm32"))]
pub mod commandline;
pub mod configuration;
pub mod controller;
pub mod error;
pub mod event;
pub mod media;
pub mod progress;
pub mod replay;
pub mod simulation;
pub mod view;
#[cfg(target_arch = "wasm32")]
pub mod web;
