use clap::Parser;

use bloom::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    bloom::logging::init();
    run(Cli::parse())
}
