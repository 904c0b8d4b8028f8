use std::process::ExitCode;

use clap::Parser;

use climate_cli::Cli;

fn main() -> ExitCode {
    climate_obs::init("climate");

    let cli = Cli::parse();

    let mut stdout = std::io::stdout().lock();
    match climate_cli::run(&cli, &mut stdout) {
        Ok(summary) => {
            tracing::info!(
                files = summary.files_processed,
                failed = summary.failed_files.len(),
                records = summary.records_folded,
                skipped = summary.records_skipped,
                "run complete"
            );
            if summary.files_processed == 0 {
                // Every input failed to open; nothing was analyzed.
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "run failed");
            ExitCode::FAILURE
        }
    }
}
