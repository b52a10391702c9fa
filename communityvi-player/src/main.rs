#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), communityvi_player::error::CommunityviPlayerError> {
	use clap::Parser;
	use communityvi_player::commandline::Commandline;

	Commandline::parse().run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
