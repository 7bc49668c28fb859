//! Background batch generation for the TUI.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use cardgen_core::{
    BatchGenerator, CancellationToken, CardError, GenerationOptions, GenerationRequest,
    ProgressObserver, ProgressSubject,
};

use crate::bridge::{PacingObserver, TuiBridgeObserver};
use crate::messages::TuiMessage;

/// Parameters for one background batch.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub generation: u64,
    pub request: GenerationRequest,
    pub options: GenerationOptions,
    pub delay: Duration,
    pub seed: Option<u64>,
}

/// Run `job` on a new thread, reporting through `tx`.
///
/// Returns the token that cancels the job.
pub fn spawn_batch(job: BatchJob, tx: Sender<TuiMessage>) -> CancellationToken {
    let cancel = CancellationToken::new();
    let worker_cancel = cancel.clone();

    thread::spawn(move || {
        let subject = ProgressSubject::new();
        subject.register(Arc::new(TuiBridgeObserver::new(tx.clone(), job.generation)));
        subject.register(Arc::new(PacingObserver::new(job.delay)));

        let start = Instant::now();
        let result = match job.seed {
            Some(seed) => run(&job, &worker_cancel, &subject, &mut StdRng::seed_from_u64(seed)),
            None => run(&job, &worker_cancel, &subject, &mut rand::rng()),
        };

        let msg = match result {
            Ok(cards) => TuiMessage::BatchComplete {
                generation: job.generation,
                cards,
                duration: start.elapsed(),
            },
            Err(CardError::Cancelled) => TuiMessage::Cancelled {
                generation: job.generation,
            },
            Err(e) => TuiMessage::Error {
                generation: job.generation,
                message: e.to_string(),
            },
        };
        let _ = tx.send(msg);
    });

    cancel
}

fn run<R: Rng + ?Sized>(
    job: &BatchJob,
    cancel: &CancellationToken,
    observer: &dyn ProgressObserver,
    rng: &mut R,
) -> Result<Vec<cardgen_core::GeneratedCard>, CardError> {
    debug!(generation = job.generation, "Worker started");
    BatchGenerator::new().generate(&job.request, &job.options, cancel, observer, rng)
}
