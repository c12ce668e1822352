//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::task::{Priority, PriorityFilter, StatusFilter};

/// Top-level CLI parser for `taskbell`.
#[derive(Debug, Parser)]
#[command(name = "taskbell", version, about = "Track tasks and get reminded before deadlines")]
pub struct Cli {
    /// Directory holding the task snapshot (overrides `TASKBELL_STORE`).
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,
    /// Keep tasks in memory only; nothing is read from or written to disk.
    #[arg(long, global = true)]
    pub ephemeral: bool,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a task.
    Add {
        /// Task title.
        title: String,
        /// Longer description.
        #[arg(short, long, default_value = "")]
        description: String,
        /// Deadline: RFC 3339, "YYYY-MM-DD HH:MM" (local), or +30m / +2h / +1d.
        #[arg(long, value_name = "WHEN")]
        deadline: Option<String>,
        /// Priority: low, medium or high.
        #[arg(short, long, default_value = "medium")]
        priority: Priority,
        /// Tag to attach; repeat for several.
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },
    /// List tasks, optionally filtered.
    List {
        /// Status: all, pending or completed.
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// Priority: all, low, medium or high.
        #[arg(long, default_value = "all")]
        priority: PriorityFilter,
        /// Only tasks carrying any of these tags; repeat for several.
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },
    /// Show one task in full.
    Show {
        /// Task ID.
        id: String,
    },
    /// Toggle a task between pending and completed.
    Done {
        /// Task ID.
        id: String,
    },
    /// Remove one or more tasks.
    Rm {
        /// Task IDs.
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// List every tag in use.
    Tags,
    /// Watch deadlines and raise alerts until interrupted.
    Watch {
        /// Log alerts instead of waiting for acknowledgment.
        #[arg(long)]
        no_prompt: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use crate::task::{Priority, PriorityFilter, StatusFilter};
    use clap::Parser;

    #[test]
    fn parses_add_with_options() {
        let cli = Cli::parse_from([
            "taskbell", "add", "Pay rent", "--deadline", "+45m", "-p", "high", "-t", "finance",
        ]);
        match cli.command {
            Command::Add { title, deadline, priority, tags, description } => {
                assert_eq!(title, "Pay rent");
                assert_eq!(deadline.as_deref(), Some("+45m"));
                assert_eq!(priority, Priority::High);
                assert_eq!(tags, vec!["finance"]);
                assert!(description.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_defaults_to_everything() {
        let cli = Cli::parse_from(["taskbell", "list"]);
        match cli.command {
            Command::List { status, priority, tags } => {
                assert_eq!(status, StatusFilter::All);
                assert_eq!(priority, PriorityFilter::All);
                assert!(tags.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::parse_from(["taskbell", "tags", "--ephemeral", "--store", "/tmp/x"]);
        assert!(cli.ephemeral);
        assert_eq!(cli.store.as_deref(), Some(std::path::Path::new("/tmp/x")));
        assert!(matches!(cli.command, Command::Tags));
    }

    #[test]
    fn rejects_unknown_priority_and_empty_rm() {
        assert!(Cli::try_parse_from(["taskbell", "add", "x", "-p", "urgent"]).is_err());
        assert!(Cli::try_parse_from(["taskbell", "list", "--status", "later"]).is_err());
        assert!(Cli::try_parse_from(["taskbell", "rm"]).is_err());
    }
}
