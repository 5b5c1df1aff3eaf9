//! Dashboard state: fetch lifecycle, stale-result guard and patient selection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::patient::Patient;
use crate::provider::ProviderError;

pub const LOADING_MESSAGE: &str = "Loading patient data...";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch patient data";

/// `Loading -> Loaded | Errored`. Both outcomes are terminal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Loaded(Vec<Patient>),
    Errored,
}

impl FetchState {
    /// Apply the provider's result. Returns false if the state had already settled.
    pub fn resolve(&mut self, result: Result<Vec<Patient>, ProviderError>) -> bool {
        if !matches!(self, FetchState::Loading) {
            return false;
        }
        *self = match result {
            Ok(patients) => FetchState::Loaded(patients),
            Err(_) => FetchState::Errored,
        };
        true
    }

    pub fn patients(&self) -> &[Patient] {
        match self {
            FetchState::Loaded(patients) => patients,
            _ => &[],
        }
    }

    /// Status line to show instead of the patient panes, if any.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            FetchState::Loading => Some(LOADING_MESSAGE),
            FetchState::Loaded(_) => None,
            FetchState::Errored => Some(FETCH_FAILED_MESSAGE),
        }
    }
}

/// Generation counter shared between a view and the fetches it starts.
///
/// Each `issue` starts a new generation; `invalidate` is called when the view
/// is torn down. A result is applied only if its ticket is still current.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    generation: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct FetchTicket {
    issued: u64,
    generation: Arc<AtomicU64>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> FetchTicket {
        let issued = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket {
            issued,
            generation: Arc::clone(&self.generation),
        }
    }

    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.issued
    }
}

/// The patient whose detail pane is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    /// Select `id` if it names one of `patients`. Unknown ids leave the selection as is.
    pub fn select(&mut self, patients: &[Patient], id: &str) -> bool {
        if patients.iter().any(|p| p.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected<'a>(&self, patients: &'a [Patient]) -> Option<&'a Patient> {
        let id = self.selected.as_deref()?;
        patients.iter().find(|p| p.id == id)
    }
}
