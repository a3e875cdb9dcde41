//! Terminal implementations of the dashboard's non-network ports.

use std::future::Future;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use irrigo_app::ports::{
    AutomationScope, Control, DashboardView, EditTarget, EditTargetError, Notice, NoticeLevel,
    Sleeper,
};
use irrigo_domain::id::ProgramId;

/// Waits on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

/// Prints notices and asks for confirmation on stdin.
#[derive(Debug, Clone, Copy)]
pub struct TerminalView {
    assume_yes: bool,
}

impl TerminalView {
    /// `assume_yes` answers every confirmation without prompting.
    #[must_use]
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl DashboardView for TerminalView {
    fn set_pending(&self, control: &Control, pending: bool) {
        tracing::debug!(?control, pending, "control pending");
    }

    fn show_automatic(&self, scope: &AutomationScope, enabled: bool) {
        tracing::debug!(?scope, enabled, "automation switch");
    }

    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{}", notice.text),
            NoticeLevel::Error => eprintln!("error: {}", notice.text),
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{prompt} [y/N] ");
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(err) => {
                tracing::warn!(error = %err, "could not read confirmation");
                false
            }
        }
    }
}

/// `y` or `yes`, any case. Everything else, including an empty line, is no.
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Keeps the edit target in a small file so other tools can pick it up.
#[derive(Debug, Clone)]
pub struct FileEditTarget {
    path: PathBuf,
}

impl FileEditTarget {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Default for FileEditTarget {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join("irrigo-edit-program"))
    }
}

impl EditTarget for FileEditTarget {
    fn remember(&self, program: &ProgramId) -> Result<(), EditTargetError> {
        std::fs::write(&self.path, program.as_str())
            .map_err(|err| EditTargetError(format!("{}: {err}", self.path.display())))
    }

    fn recall(&self) -> Option<ProgramId> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let id = content.trim();
        (!id.is_empty()).then(|| ProgramId::new(id))
    }
}
