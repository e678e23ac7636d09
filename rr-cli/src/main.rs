use anyhow::Result;
use clap::Parser;
use rr_cli::{Args, RemoteConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = RemoteConfig::from_args(args)?;
    rr_cli::run::run(config)
}
