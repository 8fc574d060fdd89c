use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Participant roster to cover.
    #[arg(long, default_value = "participants.csv")]
    participants: String,

    /// Certificate id file to append to.
    #[arg(long, default_value = "cert-id.csv")]
    cert_ids: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    idgen::generate_ids(&args.participants, &args.cert_ids)?;

    Ok(())
}
