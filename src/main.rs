//! CLI entry point for prompt-driven texture generation

use clap::Parser;
use texsynth::io::cli::{Cli, TextureRunner, init_logging};

fn main() -> texsynth::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    TextureRunner::new(cli).run()
}
