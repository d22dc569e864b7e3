//! The reconciliation pass: bring every bound channel's name in line with the
//! current time of its timezone, and drop bindings whose channel is gone.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, watch};
use tracing::{debug, error, info, warn};

use crate::errors::GatewayError;
use crate::formatter::format_label_at;
use crate::gateway::{ChannelGateway, ChannelKind};
use crate::models::binding::ChannelBinding;
use crate::store::BindingStore;

pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Aggregate counts of one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub updated: usize,
    pub skipped: usize,
    pub errors: usize,
    /// Stale bindings deleted during the pass. Each is also counted in `errors`.
    pub pruned: usize,
    /// Set when shutdown interrupted the pass before every row was visited.
    pub cancelled: bool,
}

impl SyncReport {
    fn record(&mut self, outcome: &RowOutcome) {
        match outcome {
            RowOutcome::Renamed(_) => self.updated += 1,
            RowOutcome::Unchanged | RowOutcome::NotVoice => self.skipped += 1,
            RowOutcome::Stale { removed } => {
                self.errors += 1;
                if *removed {
                    self.pruned += 1;
                }
            }
            RowOutcome::UnknownTimezone | RowOutcome::Failed(_) => self.errors += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    Completed(SyncReport),
    /// Another pass held the guard; this trigger was dropped.
    AlreadyRunning,
}

/// Result of reconciling a single binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Renamed(String),
    Unchanged,
    NotVoice,
    UnknownTimezone,
    /// The channel no longer exists. `removed` is false if deleting the row failed.
    Stale { removed: bool },
    Failed(GatewayError),
}

pub struct Reconciler {
    store: Arc<dyn BindingStore>,
    gateway: Arc<dyn ChannelGateway>,
    call_timeout: Duration,
    clock: Clock,
    shutdown: watch::Receiver<bool>,
    pass_lock: Mutex<()>,
}

impl Reconciler {
    pub fn new(
        store: Arc<dyn BindingStore>,
        gateway: Arc<dyn ChannelGateway>,
        call_timeout: Duration,
    ) -> Self {
        let (_, shutdown) = watch::channel(false);
        Self {
            store,
            gateway,
            call_timeout,
            clock: Arc::new(Utc::now),
            shutdown,
            pass_lock: Mutex::new(()),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Observe `shutdown`; once it reads `true` a running pass stops after the
    /// current row.
    pub fn with_shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn is_running(&self) -> bool {
        self.pass_lock.try_lock().is_err()
    }

    /// Run one pass over every binding. Returns [`PassOutcome::AlreadyRunning`]
    /// without doing anything if a pass is in flight.
    pub async fn run_pass(&self) -> PassOutcome {
        let Ok(_guard) = self.pass_lock.try_lock() else {
            warn!("Reconciliation pass already in progress, dropping trigger");
            return PassOutcome::AlreadyRunning;
        };

        let bindings = match self.store.all().await {
            Ok(bindings) => bindings,
            Err(e) => {
                error!(error = %e, "Failed to read channel bindings");
                return PassOutcome::Completed(SyncReport {
                    errors: 1,
                    ..Default::default()
                });
            }
        };

        info!(count = bindings.len(), "Starting reconciliation pass");

        let mut report = SyncReport::default();
        for binding in &bindings {
            if *self.shutdown.borrow() {
                info!("Shutdown requested, abandoning remaining channels");
                report.cancelled = true;
                break;
            }

            let outcome = self.reconcile_binding(binding).await;
            report.record(&outcome);
        }

        info!(
            updated = report.updated,
            skipped = report.skipped,
            errors = report.errors,
            pruned = report.pruned,
            cancelled = report.cancelled,
            "Reconciliation pass finished"
        );

        PassOutcome::Completed(report)
    }

    /// Reconcile a single binding: resolve, compute the label and rename if
    /// needed. A binding whose channel is gone is deleted.
    pub async fn reconcile_binding(&self, binding: &ChannelBinding) -> RowOutcome {
        let channel_id = binding.channel_id.as_str();

        let channel = match self.call(self.gateway.resolve(channel_id)).await {
            Ok(channel) => channel,
            Err(e) if e.is_not_found() => return self.prune(channel_id).await,
            Err(e) => {
                log_gateway_failure(channel_id, "resolve", &e);
                return RowOutcome::Failed(e);
            }
        };

        if channel.kind != ChannelKind::Voice {
            debug!(channel_id, "Not a voice channel, skipping");
            return RowOutcome::NotVoice;
        }

        let Some(label) = format_label_at(&binding.timezone_key, (self.clock)()) else {
            warn!(
                channel_id,
                timezone = %binding.timezone_key,
                "Cannot compute label for timezone"
            );
            return RowOutcome::UnknownTimezone;
        };

        if channel.name == label {
            debug!(channel_id, %label, "Name already up to date");
            return RowOutcome::Unchanged;
        }

        match self.call(self.gateway.rename(channel_id, &label)).await {
            Ok(()) => {
                info!(channel_id, from = %channel.name, to = %label, "Channel renamed");
                RowOutcome::Renamed(label)
            }
            // Deleted between resolve and rename.
            Err(e) if e.is_not_found() => self.prune(channel_id).await,
            Err(e) => {
                log_gateway_failure(channel_id, "rename", &e);
                RowOutcome::Failed(e)
            }
        }
    }

    /// Reconcile one binding under the pass guard, waiting for an in-flight
    /// pass to finish first. Used by bind so its rename never races a pass.
    pub async fn reconcile_exclusive(&self, binding: &ChannelBinding) -> RowOutcome {
        let _guard = self.pass_lock.lock().await;
        self.reconcile_binding(binding).await
    }

    async fn prune(&self, channel_id: &str) -> RowOutcome {
        warn!(channel_id, "Channel no longer exists, removing binding");
        let removed = match self.store.remove(channel_id).await {
            Ok(()) => true,
            Err(e) => {
                error!(channel_id, error = %e, "Failed to remove stale binding");
                false
            }
        };
        RowOutcome::Stale { removed }
    }

    /// Wait up to `grace` for an in-flight pass to finish. Returns false if
    /// the pass was still running when the grace period ran out.
    pub async fn drain(&self, grace: Duration) -> bool {
        tokio::time::timeout(grace, self.pass_lock.lock())
            .await
            .is_ok()
    }

    async fn call<T>(
        &self,
        fut: impl Future<Output = Result<T, GatewayError>>,
    ) -> Result<T, GatewayError> {
        tokio::time::timeout(self.call_timeout, fut)
            .await
            .unwrap_or(Err(GatewayError::Timeout(self.call_timeout)))
    }
}

fn log_gateway_failure(channel_id: &str, call: &str, e: &GatewayError) {
    match e {
        GatewayError::PermissionDenied => {
            warn!(channel_id, call, "Missing permission to manage channel")
        }
        GatewayError::AccessRevoked => warn!(channel_id, call, "No access to channel"),
        GatewayError::Timeout(after) => warn!(channel_id, call, ?after, "Call timed out"),
        GatewayError::NotFound | GatewayError::Other(_) => {
            error!(channel_id, call, error = %e, "Channel call failed")
        }
    }
}
