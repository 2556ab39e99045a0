use clap::Parser;
use miette::Result;
use chequer::cli::{Cli, Commands};
use chequer::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => chequer::cli::generate::run(args, &printer)?,
        Commands::Info(args) => chequer::cli::info::run(args, &printer)?,
        Commands::Init(args) => chequer::cli::init::run(args, &printer)?,
        Commands::Watch(args) => chequer::cli::watch::run(args, &printer)?,
        Commands::Completions(args) => chequer::cli::completions::run(args)?,
    }

    Ok(())
}
