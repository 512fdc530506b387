//! Per-session render worker.
//!
//! A [`Session`] moves an [`AnimationSequencer`] onto a background thread and
//! talks to it over channels. It pushes [`Response::Init`] as soon as it
//! starts, then answers [`Request`]s one at a time.
//!
//! # Concurrency
//!
//! Single-flight with supersede: only one render runs at a time. When
//! several requests are queued, the worker skips straight to the newest one.
//! A render in flight checks once per output row whether a newer request has
//! been submitted and, if so, is abandoned without sending a response. The
//! responses that are sent always follow request order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::decode::FrameSource;
use crate::error::RenderError;
use crate::protocol::{Request, Response};
use crate::sequencer::AnimationSequencer;

/// Handle to a running render worker.
///
/// Dropping the handle stops the worker after it drains queued requests.
pub struct Session {
    /// Requests tagged with their generation number
    request_tx: Option<Sender<(u64, Request)>>,
    /// Generation of the most recently submitted request
    generation: Arc<AtomicU64>,
    worker: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("generation", &self.generation.load(Ordering::Relaxed))
            .field("is_running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Start a worker for `sequencer`, sending responses to `responses`.
    ///
    /// The initial render is pushed before any request is serviced.
    pub fn spawn<S>(sequencer: AnimationSequencer<S>, responses: Sender<Response>) -> Self
    where
        S: FrameSource + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let generation = Arc::new(AtomicU64::new(0));
        let worker_generation = Arc::clone(&generation);

        let worker = thread::spawn(move || {
            run_worker(sequencer, rx, worker_generation, responses);
        });

        Self {
            request_tx: Some(tx),
            generation,
            worker: Some(worker),
        }
    }

    /// Submit a request, superseding any request not yet answered.
    ///
    /// Returns false if the worker has stopped.
    pub fn submit(&self, request: Request) -> bool {
        let Some(tx) = &self.request_tx else {
            return false;
        };
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tx.send((generation, request)).is_ok()
    }

    /// Shorthand for submitting [`Request::GetFrame`].
    pub fn request_frame(&self, frame_index: i64) -> bool {
        self.submit(Request::GetFrame { frame_index })
    }

    /// Check if the worker thread is still alive.
    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Stop accepting requests and wait for the worker to finish.
    ///
    /// Requests already queued are still serviced (newest wins).
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        // Closing the channel ends the worker loop once the queue is empty
        self.request_tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("Render worker panicked");
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_worker<S: FrameSource>(
    mut sequencer: AnimationSequencer<S>,
    rx: Receiver<(u64, Request)>,
    generation: Arc<AtomicU64>,
    tx: Sender<Response>,
) {
    let initial = match sequencer.render_initial() {
        Ok(init) => Response::from(init),
        Err(e) => {
            log::error!("Initial render failed: {}", e);
            Response::Error {
                message: e.to_string(),
            }
        }
    };
    if tx.send(initial).is_err() {
        return;
    }

    while let Ok(mut pending) = rx.recv() {
        while let Ok(newer) = rx.try_recv() {
            log::debug!("Request {} superseded by {}", pending.0, newer.0);
            pending = newer;
        }

        let (request_generation, Request::GetFrame { frame_index }) = pending;
        let is_stale = || generation.load(Ordering::SeqCst) != request_generation;

        let response = match sequencer.request_frame_cancellable(frame_index, is_stale) {
            Ok(frame) => Response::from(frame),
            Err(RenderError::Cancelled) => {
                log::debug!("Render of frame {} cancelled", frame_index);
                continue;
            }
            Err(e) => {
                log::warn!("Frame {} failed: {}", frame_index, e);
                Response::Error {
                    message: e.to_string(),
                }
            }
        };

        if tx.send(response).is_err() {
            // Shell went away
            break;
        }
    }

    log::debug!("Render worker stopped");
}
