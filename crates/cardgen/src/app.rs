//! Application entry point and dispatch.

use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use cardgen_cli::output::write_to_file;
use cardgen_cli::presenter::CLIResultPresenter;
use cardgen_cli::ui::print_success;
use cardgen_core::observers::LoggingObserver;
use cardgen_core::{
    check_input, export_cards, BatchGenerator, CancellationToken, CardError, GeneratedCard,
    GenerationOptions, GenerationRequest, ProgressObserver, ProgressSubject, ResultPresenter,
};
use cardgen_tui::{TuiApp, TuiSettings};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        cardgen_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    if let Some(source) = &config.check {
        return run_check(config, source);
    }

    if config.tui {
        return run_tui(config);
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let request = GenerationRequest::new(config.bin.trim(), config.count)?;
    let options = config.generation_options();

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone());

    let subject = ProgressSubject::new();
    if config.verbose && !config.quiet {
        eprintln!("{}", full_version());
        subject.register(Arc::new(LoggingObserver::new(100)));
    }

    let start = Instant::now();
    let cards = match config.seed {
        Some(seed) => generate(
            &request,
            &options,
            &cancel,
            &subject,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => generate(&request, &options, &cancel, &subject, &mut rand::rng()),
    }?;
    let duration = start.elapsed();

    if let Some(path) = &config.output {
        write_to_file(path, &export_cards(&cards, config.format))
            .with_context(|| format!("cannot write {}", path.display()))?;
        if !config.quiet {
            print_success(&format!("Wrote {} cards to {}", cards.len(), path.display()));
        }
        return Ok(());
    }

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    presenter.present_batch(&cards, config.format, duration);
    Ok(())
}

fn generate<R: Rng + ?Sized>(
    request: &GenerationRequest,
    options: &GenerationOptions,
    cancel: &CancellationToken,
    observer: &dyn ProgressObserver,
    rng: &mut R,
) -> Result<Vec<GeneratedCard>, CardError> {
    BatchGenerator::new().generate(request, options, cancel, observer, rng)
}

fn run_check(config: &AppConfig, source: &str) -> Result<()> {
    let input = if source == "-" {
        io::read_to_string(io::stdin()).context("cannot read stdin")?
    } else {
        std::fs::read_to_string(source).with_context(|| format!("cannot read {source}"))?
    };

    let report = check_input(&input);
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    presenter.present_report(&report);

    if report.all_valid() {
        Ok(())
    } else {
        Err(AppError::CheckFailed {
            invalid: report.invalid,
            total: report.total,
        }
        .into())
    }
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let options = config.generation_options();
    options.validate()?;

    let settings = TuiSettings {
        bin: config.bin.clone(),
        count: u32::try_from(config.count).unwrap_or(0),
        delay: config.delay(),
        options,
        seed: config.seed,
    };

    // Run TUI event loop on the main thread
    let mut app = TuiApp::new(settings);
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) {
    if let Err(e) = ctrlc::set_handler(move || cancel.cancel()) {
        warn!(error = %e, "Cannot install Ctrl+C handler");
    }
}
