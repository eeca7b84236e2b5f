use clap::Parser;
use greeting_wire::utils::{logger, validation::Validate};
use greeting_wire::{AppContext, CliConfig, WireConfig, WireError};

fn run(cli: &CliConfig) -> Result<String, WireError> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            WireConfig::from_file(path)?
        }
        None => WireConfig::default(),
    };
    // 組裝 bean 之前先驗證設定
    config.validate()?;

    let ctx = AppContext::new(&config)?;
    let name = cli.resolve_name(ctx.default_name());
    ctx.greeting_service().try_hello(name)
}

fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(greeting) => println!("{}", greeting),
        Err(e) => {
            tracing::error!("❌ greeting-wire failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
