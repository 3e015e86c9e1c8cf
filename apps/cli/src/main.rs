use clap::Parser;
use notecards_cli::Config;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    notecards_cli::init_logging();

    let config = Config::parse();
    notecards_cli::run(config)
}
