//! Runs a benchmark batch on a background thread.
//!
//! The worker sorts strictly one algorithm at a time. Progress is posted back over a
//! channel in the order it happens, and the final [`Batch`] is handed over once,
//! through [`BenchmarkHandle::wait`].

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::JoinHandle,
};

use crossbeam_channel::{Receiver, TryRecvError};
use log::debug;

use crate::{Algorithm, Batch, BenchError, BenchmarkRequest, BenchmarkResult};

/// Status updates posted by a running batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// The base dataset is being generated
    Generating { count: usize },
    /// `algorithm` started sorting its copy
    Running { algorithm: Algorithm },
    /// `algorithm` finished
    Finished(BenchmarkResult),
    /// The batch stopped early on request
    Cancelled,
}

pub struct Worker;

impl Worker {
    /// Validate `request` and start it on a new thread.
    ///
    /// Validation errors are returned here, before the thread is spawned.
    pub fn spawn(request: BenchmarkRequest) -> Result<BenchmarkHandle, BenchError> {
        request.validate()?;
        let (sender, receiver) = crossbeam_channel::unbounded();
        let cancel = Arc::new(AtomicBool::new(false));
        let thread = {
            let cancel = cancel.clone();
            std::thread::spawn(move || {
                debug!("Worker started: {:?}", request.algorithms);
                let batch = request.run_with(
                    |progress| {
                        // The caller may have dropped the handle's receiver; keep sorting.
                        let _ = sender.send(progress);
                    },
                    || cancel.load(Ordering::Relaxed),
                );
                debug!("Worker finished");
                batch
            })
        };
        Ok(BenchmarkHandle {
            progress: receiver,
            cancel,
            thread,
        })
    }
}

/// The caller's side of a running batch.
pub struct BenchmarkHandle {
    progress: Receiver<Progress>,
    cancel: Arc<AtomicBool>,
    thread: JoinHandle<Result<Batch, BenchError>>,
}

impl BenchmarkHandle {
    /// Progress events. The channel disconnects once the worker exits, so iterating
    /// over it ends when the batch is done.
    pub fn progress(&self) -> &Receiver<Progress> {
        &self.progress
    }

    /// Next event if one is ready. `None` also when the worker has exited.
    pub fn try_progress(&self) -> Option<Progress> {
        match self.progress.try_recv() {
            Ok(p) => Some(p),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Ask the worker to stop before the next algorithm. The running sort is not
    /// interrupted.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Block until the batch completes and take its results.
    pub fn wait(self) -> Result<Batch, BenchError> {
        match self.thread.join() {
            Ok(batch) => batch,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}
