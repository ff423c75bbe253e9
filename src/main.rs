use clap::Parser;
use linecp::utils::error::ErrorSeverity;
use linecp::utils::{logger, validation::Validate};
use linecp::{CliConfig, CopyEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting linecp");
    tracing::info!("source file path is the 1st parameter, destination file path the 2nd");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("configuration validation failed: {}", e);
        println!("{}", e);
        std::process::exit(e.exit_code(config.strict_exit));
    }

    let strict_exit = config.strict_exit;
    let engine = CopyEngine::new(config);

    match engine.run() {
        Ok(report) => {
            tracing::info!("copied {} lines ({} bytes)", report.lines, report.bytes);
            println!("copy finished");
        }
        Err(e) => {
            // refused preconditions go to stdout like the completion message;
            // a failed copy is a real error and goes to stderr
            match e.severity() {
                ErrorSeverity::Low => println!("{}", e),
                ErrorSeverity::High => eprintln!("{}", e),
            }
            std::process::exit(e.exit_code(strict_exit));
        }
    }

    Ok(())
}
