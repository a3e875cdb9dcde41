//! Dashboard loader: the initial (and retry) load of everything a page shows.

use std::fmt;

use irrigo_domain::card::{CardContext, ProgramCard};
use irrigo_domain::program::ProgramBook;
use irrigo_domain::run_state::RunState;
use irrigo_domain::settings::UserSettings;
use irrigo_domain::time::Day;
use irrigo_domain::zone::ZoneDirectory;

use crate::ports::controller::{PROGRAMS_PATH, RUN_STATE_PATH, SETTINGS_PATH};
use crate::ports::{ApiError, ControllerApi};

/// One of the three documents a load fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Settings,
    Programs,
    RunState,
}

impl Resource {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Settings => SETTINGS_PATH,
            Self::Programs => PROGRAMS_PATH,
            Self::RunState => RUN_STATE_PATH,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settings => f.write_str("settings"),
            Self::Programs => f.write_str("programs"),
            Self::RunState => f.write_str("run state"),
        }
    }
}

/// Every resource that failed during one load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    failures: Vec<(Resource, ApiError)>,
}

impl LoadError {
    #[must_use]
    pub fn failures(&self) -> &[(Resource, ApiError)] {
        &self.failures
    }

    #[must_use]
    pub fn failed_resources(&self) -> Vec<Resource> {
        self.failures.iter().map(|(resource, _)| *resource).collect()
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("could not load ")?;
        for (i, (resource, err)) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{resource} ({err})")?;
        }
        Ok(())
    }
}

impl std::error::Error for LoadError {}

/// Snapshot of controller data, replaced wholesale on every load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub settings: UserSettings,
    pub zones: ZoneDirectory,
    pub programs: ProgramBook,
    pub run_state: RunState,
}

impl DashboardData {
    #[must_use]
    pub fn new(settings: UserSettings, programs: ProgramBook, run_state: RunState) -> Self {
        Self {
            zones: settings.zone_directory(),
            settings,
            programs,
            run_state,
        }
    }

    /// One card per program, in display order.
    #[must_use]
    pub fn cards(&self, today: Day) -> Vec<ProgramCard> {
        ProgramCard::build_all(&CardContext {
            zones: &self.zones,
            book: &self.programs,
            today,
        })
    }
}

/// Loads settings, programs, and run state in one go.
pub struct DashboardLoader<A> {
    api: A,
}

impl<A: ControllerApi> DashboardLoader<A> {
    /// Create a loader backed by the given controller.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch all three documents concurrently.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] naming every resource that failed; a single
    /// failure fails the whole load.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Result<DashboardData, LoadError> {
        let (settings, programs, run_state) = futures::join!(
            self.api.fetch_settings(),
            self.api.fetch_programs(),
            self.api.fetch_run_state(),
        );

        match (settings, programs, run_state) {
            (Ok(settings), Ok(programs), Ok(run_state)) => {
                tracing::debug!(
                    programs = programs.len(),
                    zones = settings.zones.len(),
                    running = run_state.program_running,
                    "dashboard loaded"
                );
                Ok(DashboardData::new(settings, programs, run_state))
            }
            (settings, programs, run_state) => {
                let failures: Vec<(Resource, ApiError)> = [
                    (Resource::Settings, settings.err()),
                    (Resource::Programs, programs.err()),
                    (Resource::RunState, run_state.err()),
                ]
                .into_iter()
                .filter_map(|(resource, err)| err.map(|err| (resource, err)))
                .collect();
                let error = LoadError { failures };
                tracing::warn!(error = %error, "dashboard load failed");
                Err(error)
            }
        }
    }
}
