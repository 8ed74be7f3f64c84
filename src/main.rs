use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wireframe::{Model, Wireframe, DEFAULT_MODEL, DEFAULT_OUTPUT};

/// Render the edges of an OBJ model to output.tga
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Wavefront OBJ model
    #[arg(value_name = "MODEL", default_value = DEFAULT_MODEL)]
    model: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let model = Model::load(&cli.model)
        .with_context(|| format!("cannot render {}", cli.model.display()))?;

    let wire = Wireframe::default();
    wire.render_to_file(&model, DEFAULT_OUTPUT)
        .with_context(|| format!("cannot write {}", DEFAULT_OUTPUT))?;
    info!(model = %cli.model.display(), output = DEFAULT_OUTPUT, "done");
    Ok(())
}
