use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use voiceclock_core::reconcile::{PassOutcome, Reconciler};

/// Run a reconciliation pass immediately, then every `period`, until
/// `shutdown` turns true or its sender goes away. Ticks missed while a pass
/// runs are skipped.
pub async fn run_scheduler(
    reconciler: Arc<Reconciler>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(?period, "Reconciliation scheduler started");

    loop {
        if *shutdown.borrow() {
            break;
        }

        tokio::select! {
            _ = ticker.tick() => {
                if let PassOutcome::AlreadyRunning = reconciler.run_pass().await {
                    debug!("Scheduled tick skipped, a pass is already running");
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }

    info!("Reconciliation scheduler stopped");
}
