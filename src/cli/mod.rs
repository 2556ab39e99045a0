pub mod completions;
pub mod generate;
pub mod info;
pub mod init;
pub mod watch;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::manifest::Manifest;
use crate::types::{BoardSize, Colour, NodeSize, Spacing};

/// chequer - Chequerboard backdrop generator
#[derive(Parser, Debug)]
#[command(name = "chequer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a backdrop PNG
    Generate(generate::GenerateArgs),

    /// Show the tiling a configuration produces
    Info(info::InfoArgs),

    /// Initialize a chequer project (generates chequer.yaml)
    Init(init::InitArgs),

    /// Regenerate the backdrop whenever chequer.yaml changes
    Watch(watch::WatchArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Backdrop configuration flags shared by several commands.
///
/// Flags override values from the manifest.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Manifest to read (default: ./chequer.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Board side length as a power-of-two exponent
    #[arg(long, conflicts_with_all = ["board", "node", "spacing"])]
    pub size_exp: Option<u32>,

    /// Node radius as a power-of-two exponent
    #[arg(long, conflicts_with_all = ["board", "node", "spacing"])]
    pub radius_exp: Option<u32>,

    /// Board size tier: tiny, small, medium, large, huge (or 128..2048)
    #[arg(long)]
    pub board: Option<BoardSize>,

    /// Node size tier: xs, s, m, l, xl (or 1..16)
    #[arg(long)]
    pub node: Option<NodeSize>,

    /// Node spacing: none, small, large
    #[arg(long)]
    pub spacing: Option<Spacing>,

    /// Colour of even tiles
    #[arg(long)]
    pub colour_a: Option<Colour>,

    /// Colour of odd tiles
    #[arg(long)]
    pub colour_b: Option<Colour>,
}

impl ConfigArgs {
    /// The flags as a manifest layer.
    pub fn overrides(&self) -> Manifest {
        Manifest {
            size_exponent: self.size_exp,
            radius_exponent: self.radius_exp,
            board: self.board,
            node: self.node,
            spacing: self.spacing,
            colour_a: self.colour_a,
            colour_b: self.colour_b,
            ..Default::default()
        }
    }

    /// Load the manifest and apply the flags on top.
    pub fn manifest(&self) -> Result<Manifest> {
        let base = Manifest::load_or_default(self.config.as_deref())?;
        Ok(base.overlay(&self.overrides()))
    }
}
