use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;

use renderer::Assets;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Participant name as it should appear on the certificate.
    #[arg(long)]
    name: String,

    /// Issued certificate id.
    #[arg(long)]
    id: String,

    /// Participation category; unknown values use the participant template.
    #[arg(long, default_value = "PARTICIPANT")]
    category: String,

    /// Directory holding the template images and fonts.
    #[arg(long, default_value = "assets")]
    assets: String,

    /// Output path.
    #[arg(long, default_value = "certificate.pdf")]
    out: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let assets = Assets::load(&args.assets)?;
    let out =
        File::create(&args.out).with_context(|| format!("Failed to create {}", args.out))?;

    renderer::render_certificate(&assets, &args.name, &args.id, &args.category, out)?;

    println!("Saved {}", args.out);

    Ok(())
}
