//! Command dispatch and handlers.

pub mod add;
pub mod done;
pub mod list;
pub mod rm;
pub mod show;
pub mod tags;
pub mod watch;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::store::TaskStore;

/// Dispatch a parsed command line to its handler.
///
/// Configuration is resolved first; `--ephemeral` swaps file storage for an
/// in-memory store.
///
/// # Errors
///
/// Returns an error string if configuration or the selected command fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = Config::load(cli.store.as_deref())?;
    let ctx = ServiceContext::live(&config);
    let ctx = if cli.ephemeral { ctx.ephemeral() } else { ctx };
    tracing::debug!(store = %config.store_dir.display(), ephemeral = cli.ephemeral, "dispatching");
    dispatch_with_context(&cli.command, &ctx, &config)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
) -> Result<(), String> {
    match command {
        Command::Add { title, description, deadline, priority, tags } => {
            add::run(ctx, title, description, deadline.as_deref(), *priority, tags)
        }
        Command::List { status, priority, tags } => list::run(ctx, *status, *priority, tags),
        Command::Show { id } => show::run(ctx, id),
        Command::Done { id } => done::run(ctx, id),
        Command::Rm { ids } => rm::run(ctx, ids),
        Command::Tags => tags::run(ctx),
        Command::Watch { no_prompt } => watch::run(ctx, config, *no_prompt),
    }
}

/// Prints the warning left by a failed save, if any.
fn report_persist_warning(store: &mut TaskStore) {
    if let Some(warning) = store.take_persist_warning() {
        eprintln!("Warning: {warning}. Changes are kept for this session only.");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use chrono::{DateTime, Utc};

    use crate::adapters::memory::{
        CollectingSink, ManualClock, MemoryKeyValueStore, RecordingNotifier, SequentialIdGenerator,
    };
    use crate::context::ServiceContext;

    pub(crate) fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-15T10:00:00Z").unwrap().with_timezone(&Utc)
    }

    /// Context over an in-memory store, frozen at [`fixed_now`].
    pub(crate) fn memory_context() -> (ServiceContext, Arc<MemoryKeyValueStore>) {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let ctx = ServiceContext {
            clock: Arc::new(ManualClock::new(fixed_now())),
            id_gen: Arc::new(SequentialIdGenerator::default()),
            kv: kv.clone(),
            notifier: Arc::new(RecordingNotifier::granted()),
            sink: Arc::new(CollectingSink::new()),
        };
        (ctx, kv)
    }
}
