//! `taskbell watch` command.

use std::future::Future;

use tokio::time::MissedTickBehavior;

use crate::alert::AlertEngine;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::store::TaskStore;

/// Execute the `watch` command.
///
/// Runs the deadline alert loop on a single-threaded runtime until Ctrl-C.
///
/// # Errors
///
/// Returns an error string if the runtime or signal handler cannot be set
/// up, or the alert loop fails.
pub fn run(ctx: &ServiceContext, config: &Config, no_prompt: bool) -> Result<(), String> {
    let ctx = if no_prompt { ctx.clone().without_prompt() } else { ctx.clone() };
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {e}"))?;

    runtime.block_on(async {
        let ctrl_c = async {
            tokio::signal::ctrl_c().await.map_err(|e| format!("Failed to listen for Ctrl-C: {e}"))
        };
        let engine = watch_until(&ctx, config, ctrl_c).await?;
        println!("Stopped after {} alert(s).", engine.alerted().len());
        Ok::<(), String>(())
    })
}

/// Runs the alert loop until `shutdown` resolves and returns the stopped
/// engine.
///
/// Other `taskbell` invocations change the saved tasks behind this
/// process's back, so the saved snapshot is re-read every poll interval and
/// any difference is published to the alert loop.
pub(crate) async fn watch_until<F>(
    ctx: &ServiceContext,
    config: &Config,
    shutdown: F,
) -> Result<AlertEngine, String>
where
    F: Future<Output = Result<(), String>>,
{
    let mut store = TaskStore::open(ctx);
    let armed = store.tasks().iter().filter(|t| !t.completed && t.deadline.is_some()).count();
    println!(
        "Watching {armed} pending task(s) with deadlines (alerting {} min ahead). Press Ctrl-C to stop.",
        config.alerts.lookahead.num_minutes()
    );

    let handle = AlertEngine::new(ctx, config.alerts.clone()).start(store.subscribe());

    let period = config.alerts.poll_interval.max(std::time::Duration::from_millis(1));
    let mut reload = tokio::time::interval(period);
    reload.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the store was just loaded.
    reload.tick().await;

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            result = &mut shutdown => {
                result?;
                break;
            }
            _ = reload.tick() => {
                if store.reload() {
                    tracing::info!(count = store.tasks().len(), "picked up saved task changes");
                }
            }
        }
    }
    handle.stop().await
}
