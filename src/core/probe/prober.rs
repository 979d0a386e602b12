//! Prober - orchestration for one reachability target
//!
//! Wires the pieces together per tick:
//!
//! 1. Configuration check (missing/invalid URL → `Error`, no network)
//! 2. `ProbeChain::probe()` → `ProbeOutcome`
//! 3. `classify()` → `Classification`
//! 4. `ProberSession::apply()` → `StatusUpdate` (state updated first)
//! 5. `SessionCallbacks::dispatch()` → display update and transition actions
//!
//! Ticks may overlap; whichever probe completes last writes the status. After
//! `stop()` the session is torn down and late results are discarded.

use crate::core::probe::chain::ProbeChain;
use crate::core::probe::classifier::{classify, classify_config};
use crate::core::probe::client::{IsahcProbeClient, ProbeClient};
use crate::core::probe::debug_logger::get_debug_logger;
use crate::core::probe::scheduler::Scheduler;
use crate::core::probe::session::{ProberSession, SessionCallbacks, StatusUpdate};
use crate::core::probe::types::{DisplayState, ProbeError, ProbeTarget, Status};
use futures::FutureExt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

/// Shared handles needed to run a single probe cycle
#[derive(Clone)]
struct ProbeTask {
    session: Arc<Mutex<ProberSession>>,
    chain: ProbeChain,
    callbacks: SessionCallbacks,
}

fn lock_session(session: &Mutex<ProberSession>) -> MutexGuard<'_, ProberSession> {
    // Never held across an await; a poisoned lock still holds consistent state
    session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ProbeTask {
    async fn execute(self) -> Option<StatusUpdate> {
        let debug_logger = get_debug_logger();

        let target = {
            let session = lock_session(&self.session);
            if !session.is_active() {
                return None;
            }
            session.target().clone()
        };

        let classification = match classify_config(&target) {
            Some(config_error) => config_error,
            None => {
                let probe_id = format!("probe_{}", uuid::Uuid::new_v4());
                let method = if target.prefer_get { "GET" } else { "HEAD" };
                debug_logger.probe_start(&target.url, method, probe_id.clone());

                let started = Instant::now();
                let outcome = self.chain.probe(&target).await;
                let classification = classify(&target, &outcome);

                debug_logger.probe_end(
                    classification.status.keyword(),
                    outcome.status_code,
                    started.elapsed().as_millis() as u64,
                    probe_id,
                );
                classification
            }
        };

        let status = classification.status;
        let reason = classification.reason.clone();
        let update = lock_session(&self.session).apply(classification);

        let Some(update) = update else {
            debug_logger.stale_result_discarded(&target.url, status.keyword());
            return None;
        };

        if update.previous != update.current {
            debug_logger.status_transition(update.previous.keyword(), update.current.keyword(), &reason);
        }

        self.callbacks.dispatch(&update, !target.background_only);
        Some(update)
    }
}

/// Reachability prober for one target
pub struct Prober {
    task: ProbeTask,
    scheduler: Scheduler,
}

impl Prober {
    /// Create a prober backed by the isahc client
    pub fn new(target: ProbeTarget, callbacks: SessionCallbacks) -> Result<Self, ProbeError> {
        let client: Arc<dyn ProbeClient> = Arc::new(IsahcProbeClient::new()?);
        Ok(Self::with_client(target, callbacks, client))
    }

    /// Create a prober with a custom client (for testing)
    pub fn with_client(
        target: ProbeTarget,
        callbacks: SessionCallbacks,
        client: Arc<dyn ProbeClient>,
    ) -> Self {
        Self::with_chain(target, callbacks, ProbeChain::new(client))
    }

    /// Create a prober with a preconfigured chain
    pub fn with_chain(target: ProbeTarget, callbacks: SessionCallbacks, chain: ProbeChain) -> Self {
        Self {
            task: ProbeTask {
                session: Arc::new(Mutex::new(ProberSession::new(target))),
                chain,
                callbacks,
            },
            scheduler: Scheduler::new(),
        }
    }

    /// Probe immediately, then every `interval`
    ///
    /// Must be called from within a tokio runtime. Restarting a stopped prober
    /// is not supported: its session stays torn down.
    pub fn start(&mut self) {
        let period = lock_session(&self.task.session).target().interval();
        let task = self.task.clone();

        self.scheduler.start(period, move || {
            let task = task.clone();
            async move {
                task.execute().await;
            }
            .boxed()
        });
    }

    /// Stop scheduling and tear down the session; idempotent
    pub fn stop(&mut self) {
        self.scheduler.stop();
        lock_session(&self.task.session).deactivate();
    }

    /// Run one probe cycle outside the schedule
    pub async fn run_once(&self) -> Option<StatusUpdate> {
        self.task.clone().execute().await
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn status(&self) -> Status {
        lock_session(&self.task.session).status()
    }

    pub fn display(&self) -> DisplayState {
        lock_session(&self.task.session).display()
    }

    pub fn target(&self) -> ProbeTarget {
        lock_session(&self.task.session).target().clone()
    }
}

impl Drop for Prober {
    fn drop(&mut self) {
        self.stop();
    }
}
