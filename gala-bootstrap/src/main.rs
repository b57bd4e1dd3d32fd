use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gala")]
#[command(about = "Gala Event Management Console", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var("GALA_CONFIG", config);
    }

    gala_bootstrap::run()
}
