use clap::{Parser, Subcommand};

pub mod errors;
pub mod upload;
use upload::Upload;

#[derive(Debug, Parser)]
#[clap(about, version)]
struct Cli {
    #[clap(subcommand)]
    command: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    #[clap(about = "Upload a file to the upload service")]
    Upload(Upload),
}

#[tokio::main]
pub async fn main() {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();
    let result = match cli.command {
        Subcommands::Upload(upload) => upload.run().await,
    };
    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
