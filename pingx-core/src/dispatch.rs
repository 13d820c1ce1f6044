//! Completion signaling for user-triggered requests.
//!
//! The UI-facing contract is: exactly one outcome, delivered exactly once,
//! over a channel the caller drains from its own thread. A request runs on a
//! worker thread; the in-flight counter is the "busy indicator" and clears
//! before the outcome is delivered, on success and failure alike.
//!
//! Cancellation is deliberately unsupported: once dispatched, a request runs
//! to completion or failure.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use serde::Serialize;

use crate::api::{ApiService, Outcome};
use crate::client::HttpClient;

/// Runs requests on worker threads and signals completion over channels.
pub struct Dispatcher<C> {
    service: ApiService,
    client: Arc<C>,
    in_flight: Arc<AtomicUsize>,
}

impl<C: HttpClient + Send + Sync + 'static> Dispatcher<C> {
    pub fn new(service: ApiService, client: C) -> Self {
        Self {
            service,
            client: Arc::new(client),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// True while any dispatched request has not yet produced its outcome.
    pub fn busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Dispatch a GET of `path`; the receiver yields the single outcome.
    pub fn spawn_fetch(&self, path: &str) -> mpsc::Receiver<Outcome> {
        let path = path.to_string();
        self.spawn(move |service, client| service.fetch(client, &path))
    }

    /// Dispatch a POST of `payload` to `path`.
    pub fn spawn_post<P>(&self, path: &str, payload: P) -> mpsc::Receiver<Outcome>
    where
        P: Serialize + Send + 'static,
    {
        let path = path.to_string();
        self.spawn(move |service, client| service.post(client, &path, &payload))
    }

    fn spawn<F>(&self, job: F) -> mpsc::Receiver<Outcome>
    where
        F: FnOnce(&ApiService, &C) -> Outcome + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let service = self.service.clone();
        let client = Arc::clone(&self.client);
        // Entered on the caller's thread so `busy()` is true as soon as this
        // method returns. The guard clears the counter even if the job panics.
        let guard = InFlightGuard::enter(Arc::clone(&self.in_flight));
        thread::spawn(move || {
            let outcome = job(&service, client.as_ref());
            drop(guard);
            let _ = tx.send(outcome);
        });
        rx
    }
}

struct InFlightGuard(Arc<AtomicUsize>);

impl InFlightGuard {
    fn enter(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
