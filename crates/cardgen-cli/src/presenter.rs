//! CLI result presenter.
//!
//! Card records go to stdout so they can be piped; headers, summaries and
//! errors go to stderr.

use std::time::Duration;

use cardgen_core::checker::CheckReport;
use cardgen_core::export::{export_cards, ExportFormat};
use cardgen_core::interfaces::ResultPresenter;
use cardgen_core::GeneratedCard;

use crate::output::{batch_summary, format_duration, report_lines};
use crate::ui::{print_error, print_header, print_success, print_warning};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_batch(&self, cards: &[GeneratedCard], format: ExportFormat, duration: Duration) {
        if !self.quiet {
            print_header(&batch_summary(cards));
        }

        println!("{}", export_cards(cards, format));

        if self.verbose && !self.quiet {
            eprintln!("Duration: {}", format_duration(duration));
        }
    }

    fn present_report(&self, report: &CheckReport) {
        if self.quiet {
            for card in &report.accepted {
                println!("{}", card.original);
            }
            return;
        }

        let lines = report_lines(report);
        let (summary, details) = lines.split_last().map_or(("", &[][..]), |(s, d)| (s.as_str(), d));
        for line in details {
            println!("{line}");
        }
        if report.all_valid() {
            print_success(summary);
        } else {
            print_warning(summary);
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
