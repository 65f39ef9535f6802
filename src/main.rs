use clap::Parser;
use facade_order::utils::{logger, validation::Validate};
use facade_order::{CliConfig, OrderSession, StdConsole};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting facade-order");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    // keep stdout pure JSON when --json is set
    let console = if config.json {
        StdConsole::stdio().with_prompt_writer(std::io::stderr())
    } else {
        StdConsole::stdio()
    };

    let result = OrderSession::new(console, &config).and_then(|mut s| s.run());

    match result {
        Ok(report) => {
            tracing::info!(
                "✅ {} order completed: {} facade(s), total {}",
                report.material,
                report.order.len(),
                report.order.calculate_total_cost()
            );
        }
        Err(e) => {
            tracing::error!("❌ Order session failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
