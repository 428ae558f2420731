//! CLI entry point for template-gen

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use template_gen::{Generator, Params};

#[derive(Parser)]
#[command(name = "template-gen")]
#[command(version)]
#[command(about = "Render a markdown document with YAML metadata into an HTML page", long_about = None)]
struct Cli {
    /// Markdown document with a `---` delimited YAML metadata block
    input: PathBuf,

    /// Output file (defaults to the input file name plus `.html`)
    output: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "template_gen=debug,info"
    } else {
        "template_gen=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let params = Params::new(cli.input, cli.output)?;
    tracing::debug!("Converting {:?} into {:?}", params.input, params.output);

    let generator = Generator::new()?;
    generator.generate(&params)?;

    Ok(())
}
