//! Periodic one-way sync from the remote endpoint.
//!
//! `SyncScheduler::start` spawns a timer thread that multiplexes a
//! `crossbeam_channel::tick` with a stop channel. Each tick hands the poll to
//! a worker thread so the timer never blocks on the network. `SyncTask` carries
//! an in-flight flag shared by all its clones: while one poll is running,
//! further polls (scheduled or manual) return `PollOutcome::Skipped`.
//!
//! Remote data is always appended, never reconciled. Failures are logged by
//! the scheduler and the next tick simply tries again.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Utc};
use crossbeam_channel::{Sender, bounded, select, tick};
use log::{debug, error, info};
use quote_common::Result;

use crate::manager::QuoteManager;
use crate::remote::RemoteEndpoint;

/// Manager shared between the front end and the scheduler.
pub type SharedManager = Arc<Mutex<QuoteManager>>;

/// Summary of one completed poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollReport {
    /// Quotes appended by this poll.
    pub appended: usize,
    /// Collection length afterwards.
    pub total: usize,
    /// When the poll finished.
    pub finished_at: DateTime<Utc>,
}

/// What a poll attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Fetched and appended.
    Completed(PollReport),
    /// Another poll was still in flight.
    Skipped,
}

/// Clears the in-flight flag when the poll ends, including on error.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One poll job: fetch from `endpoint`, append into `manager`.
#[derive(Clone)]
pub struct SyncTask {
    manager: SharedManager,
    endpoint: Arc<dyn RemoteEndpoint>,
    in_flight: Arc<AtomicBool>,
}

impl SyncTask {
    /// Creates a task with its own in-flight flag.
    pub fn new(manager: SharedManager, endpoint: Arc<dyn RemoteEndpoint>) -> Self {
        SyncTask {
            manager,
            endpoint,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns `true` while a poll is running.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Polls once unless a poll is already running. The manager is only
    /// locked for the append, not for the network round trip.
    pub fn poll_now(&self) -> Result<PollOutcome> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Previous poll still in flight, skipping");
            return Ok(PollOutcome::Skipped);
        }
        let _guard = InFlight(&self.in_flight);

        let posts = self.endpoint.fetch_all()?;
        let mut manager = self.manager.lock()?;
        let appended = manager.append_remote(posts)?;
        Ok(PollOutcome::Completed(PollReport {
            appended,
            total: manager.store().len(),
            finished_at: Utc::now(),
        }))
    }
}

fn run_poll(task: &SyncTask) {
    match task.poll_now() {
        Ok(PollOutcome::Completed(report)) => info!(
            "Sync appended {} quotes ({} total) at {}",
            report.appended,
            report.total,
            report.finished_at.to_rfc3339()
        ),
        Ok(PollOutcome::Skipped) => {}
        Err(e) => error!("Remote sync failed: {}", e),
    }
}

/// Starts recurring polls.
pub struct SyncScheduler;

impl SyncScheduler {
    /// Spawns the timer thread. The first poll happens one `interval` after
    /// start. Polling continues until the returned handle is cancelled or
    /// dropped.
    pub fn start(task: SyncTask, interval: Duration) -> SyncHandle {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let timer = thread::spawn(move || {
            info!("Sync scheduler started, interval {:?}", interval);
            let ticker = tick(interval);
            loop {
                select! {
                    recv(stop_rx) -> _ => break,
                    recv(ticker) -> _ => {
                        let task = task.clone();
                        thread::spawn(move || run_poll(&task));
                    }
                }
            }
            info!("Sync scheduler stopped");
        });
        SyncHandle {
            stop_tx: Some(stop_tx),
            timer: Some(timer),
        }
    }
}

/// Handle of a running scheduler.
///
/// Cancelling stops future ticks; a poll that is already running finishes on
/// its own worker thread.
pub struct SyncHandle {
    stop_tx: Option<Sender<()>>,
    timer: Option<JoinHandle<()>>,
}

impl SyncHandle {
    /// Stops the timer and waits for its thread to exit.
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(timer) = self.timer.take() {
            if timer.join().is_err() {
                error!("Sync timer thread panicked");
            }
        }
    }
}

impl Drop for SyncHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
