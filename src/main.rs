use clap::Parser;
use vehicle_validator::utils::logger;
use vehicle_validator::{exit_code, outcome_message, CliConfig, LocalFile, Validator};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format);
    tracing::debug!("CLI config: {:?}", config);

    let outcome = Validator::new(LocalFile::new(&config.path)).validate();

    match &outcome {
        Ok(summary) => {
            let summary = serde_json::to_string(summary)?;
            tracing::debug!(%summary, "Validation passed");
        }
        Err(e) => tracing::debug!("Validation failed ({:?})", e.kind()),
    }

    println!("{}", outcome_message(&outcome));

    let code = exit_code(&outcome);
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
