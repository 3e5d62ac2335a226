//! CLI definitions and dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fontbuild_core::Orchestrator;

#[derive(Parser)]
#[command(name = "fontbuild")]
#[command(about = "Build font samples from nanoemoji configs and build scripts")]
pub struct Cli {
    /// Configuration files to build; defaults to everything in config/.
    pub configs: Vec<PathBuf>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        Orchestrator::new().run(&self.configs)
    }
}
