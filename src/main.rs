use classtree::cli::{Cli, CliContext, run};
use classtree_config::{LoggingConfig, SeedConfig, StoreConfig};
use classtree_observability::{init_metrics, init_tracing};
use clap::Parser;
use dotenvy::dotenv;
use tracing::error;

fn main() {
    dotenv().ok();

    let _guard = init_tracing(&LoggingConfig::from_env());
    let metrics = init_metrics();

    let cli = Cli::parse();
    let mut ctx = CliContext::seeded(&StoreConfig::from_env(), &SeedConfig::from_env(), metrics);

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = run(cli.command, &mut ctx, &mut stdout) {
        error!(kind = err.kind.as_str(), "{}", err);
        eprintln!("❌ {}", err);
        std::process::exit(err.kind.exit_code());
    }
}
