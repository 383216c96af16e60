mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod kobo;
mod notify;
mod output;
#[cfg(test)]
mod test_support;
mod utils;

use std::io::IsTerminal;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;

use cli::Cli;
use config::{Config, Settings};
use error::ConfigError;
use kobo::KoboClient;
use notify::{Notifier, SmtpNotifier};
use output::{output_summary_json, print_summary_table};
use utils::init_logging;

/// Exit code for configuration problems found before the run starts
const CONFIG_ERROR_EXIT: u8 = 1;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version also arrive here and are not failures
            return if e.use_stderr() {
                ExitCode::from(CONFIG_ERROR_EXIT)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(cli.debug);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(CONFIG_ERROR_EXIT)
        }
    }
}

fn run(cli: Cli) -> Result<u8, ConfigError> {
    let config = Config::load(cli.config.as_deref())?;
    let cli = cli.with_config(&config);
    let settings = Settings::from_env(&cli, config)?;

    let notifier = match &settings.email {
        Some(email) => Some(SmtpNotifier::new(email)?),
        None => {
            if !cli.no_email {
                tracing::warn!("no SMTP settings; notifications disabled");
            }
            None
        }
    };

    let client = KoboClient::new(&settings.api_url, &settings.token, settings.timeout);
    let summary = app::run(
        &settings,
        &client,
        notifier.as_ref().map(|n| n as &dyn Notifier),
        Utc::now(),
    );

    if cli.json {
        println!("{}", output_summary_json(&summary));
    } else {
        print_summary_table(&summary, settings.timezone, std::io::stdout().is_terminal());
    }

    Ok(summary.exit_code())
}
