//! Live alert sinks.

use std::io::{BufRead, BufReader, Write};
use std::sync::{Mutex, OnceLock};

use tokio::sync::mpsc;

use crate::alert::DeadlineAlert;
use crate::ports::AlertSink;

type Input = Box<dyn BufRead + Send>;
type Output = Box<dyn Write + Send>;

/// Prints each alert and waits for the user to press Enter.
///
/// Prompts run one at a time on a dedicated thread, started on the first
/// alert. `acknowledge` only queues the alert, so a pending prompt never
/// stalls the runtime driving the alert loop or its shutdown.
pub struct PromptSink {
    streams: Mutex<Option<(Input, Output)>>,
    queue: OnceLock<mpsc::UnboundedSender<DeadlineAlert>>,
}

impl PromptSink {
    /// Prompts on the terminal.
    #[must_use]
    pub fn stdio() -> Self {
        Self::with_streams(BufReader::new(std::io::stdin()), std::io::stdout())
    }

    /// Prompts on the given streams.
    #[must_use]
    pub fn with_streams(
        input: impl BufRead + Send + 'static,
        output: impl Write + Send + 'static,
    ) -> Self {
        Self {
            streams: Mutex::new(Some((Box::new(input), Box::new(output)))),
            queue: OnceLock::new(),
        }
    }

    fn queue(&self) -> &mpsc::UnboundedSender<DeadlineAlert> {
        self.queue.get_or_init(|| {
            let (tx, rx) = mpsc::unbounded_channel();
            let streams = self.streams.lock().ok().and_then(|mut streams| streams.take());
            if let Some((input, output)) = streams {
                let spawned = std::thread::Builder::new()
                    .name("taskbell-prompt".to_owned())
                    .spawn(move || prompt_loop(rx, input, output));
                if let Err(err) = spawned {
                    tracing::warn!(error = %err, "failed to start acknowledgment prompt");
                }
            }
            tx
        })
    }
}

impl AlertSink for PromptSink {
    fn acknowledge(&self, alert: &DeadlineAlert) {
        if self.queue().send(alert.clone()).is_err() {
            tracing::warn!(task_id = %alert.task_id, "{}", alert.notification_body());
        }
    }
}

fn prompt_loop(
    mut alerts: mpsc::UnboundedReceiver<DeadlineAlert>,
    mut input: Input,
    mut output: Output,
) {
    while let Some(alert) = alerts.blocking_recv() {
        let printed = writeln!(output, "\n{}\n", alert.prompt_text())
            .and_then(|()| write!(output, "Press Enter to acknowledge... "))
            .and_then(|()| output.flush());
        if let Err(err) = printed {
            tracing::warn!(task_id = %alert.task_id, error = %err, "failed to print deadline alert");
            continue;
        }

        let mut line = String::new();
        if let Err(err) = input.read_line(&mut line) {
            tracing::warn!(task_id = %alert.task_id, error = %err, "failed to read acknowledgment");
        }
    }
}

/// Reports alerts through the log only, for unattended runs.
pub struct LogSink;

impl AlertSink for LogSink {
    fn acknowledge(&self, alert: &DeadlineAlert) {
        tracing::warn!(
            task_id = %alert.task_id,
            deadline = %alert.deadline.to_rfc3339(),
            "{}",
            alert.notification_body()
        );
    }
}
