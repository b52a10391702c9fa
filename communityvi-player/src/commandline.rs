use crate::configuration::Configuration;
use crate::controller::PlayerController;
use crate::error::CommunityviPlayerError;
use crate::replay::{parse_event_log, replay};
use crate::simulation::{MediaState, RecordingView, SimulatedMedia};
use std::fs::read_to_string;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[command(version, about = "Drives the communityvi player controls without a browser.")]
pub struct Commandline {
	#[arg(short = 'c', long = "config-file")]
	pub configuration_file_path: Option<PathBuf>,
	#[command(subcommand)]
	pub command: BaseCommand,
}

#[derive(clap::Subcommand)]
pub enum BaseCommand {
	/// Replay a JSON event log against a simulated media element
	Replay(ReplayCommand),
	/// Print the configuration
	Configuration,
}

#[derive(clap::Args)]
pub struct ReplayCommand {
	/// JSON array of player events
	pub event_log_path: PathBuf,
	/// Duration of the simulated medium in seconds, unknown if omitted
	#[arg(long)]
	pub duration: Option<f64>,
	/// Initial position in seconds
	#[arg(long, default_value_t = 0.0)]
	pub position: f64,
	/// Width of the progress track in pixels
	#[arg(long, default_value_t = 640.0)]
	pub track_width: f64,
	/// Start out playing instead of paused
	#[arg(long)]
	pub playing: bool,
}

impl Commandline {
	pub fn run(self) -> Result<(), CommunityviPlayerError> {
		let configuration = match &self.configuration_file_path {
			Some(path) => Configuration::from_file(path)?,
			None => Configuration::default(),
		};

		tracing_subscriber::fmt()
			.with_env_filter(EnvFilter::try_new(&configuration.log_filters)?)
			.with_writer(std::io::stderr)
			.init();

		match self.command {
			BaseCommand::Replay(command) => {
				info!("Replaying events from '{}'.", command.event_log_path.display());
				let events = parse_event_log(&read_to_string(&command.event_log_path)?)?;

				let media = SimulatedMedia::new(
					MediaState::builder()
						.paused(!command.playing)
						.current_time(command.position)
						.duration(command.duration.unwrap_or(f64::NAN))
						.build(),
				);
				let mut controller =
					PlayerController::new(media, RecordingView::new(command.track_width), configuration);

				let outcome = replay(&mut controller, events);
				println!("{}", serde_json::to_string_pretty(&outcome)?);
			}
			BaseCommand::Configuration => println!("{configuration:?}"),
		}
		Ok(())
	}
}
