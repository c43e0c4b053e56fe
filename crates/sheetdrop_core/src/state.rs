use std::path::PathBuf;
use std::time::Duration;

use crate::view_model::{company_count_label, AppViewModel, NO_FILE_PLACEHOLDER};
use crate::Effect;

pub type ToastId = u64;

/// Visual flavor of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

/// Drop-zone affordance while a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropHint {
    #[default]
    None,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
}

/// Resource locators returned by the processing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLinks {
    pub file_url: String,
    pub log_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyStatus {
    pub company: String,
    pub status: String,
}

/// Successful response from the processing endpoint, as seen by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub links: ArtifactLinks,
    pub statuses: Vec<CompanyStatus>,
}

/// Submission lifecycle. Every failure path returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    RevealingResults,
    Complete,
}

/// Cosmetic delays, injected so tests can zero them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Pause before dispatching the request, for perceived smoothness.
    pub submit_delay: Duration,
    /// Stagger between revealed result rows.
    pub reveal_delay: Duration,
    /// How long a toast stays on screen.
    pub toast_duration: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(200),
            reveal_delay: Duration::from_millis(120),
            toast_duration: Duration::from_millis(4000),
        }
    }
}

impl Timings {
    pub fn zero() -> Self {
        Self {
            submit_delay: Duration::ZERO,
            reveal_delay: Duration::ZERO,
            toast_duration: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    timings: Timings,
    pub(crate) text: String,
    pub(crate) file: Option<SelectedFile>,
    pub(crate) force_update: bool,
    pub(crate) company_count: Option<usize>,
    pub(crate) drop_hint: DropHint,
    pub(crate) phase: Phase,
    pub(crate) links: Option<ArtifactLinks>,
    pub(crate) rows: Vec<CompanyStatus>,
    pub(crate) revealed: usize,
    pub(crate) download_prompt: bool,
    toasts: Vec<Toast>,
    next_toast_id: ToastId,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timings(timings: Timings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the form holds anything submittable: a file, or at least one
    /// non-blank company line.
    pub(crate) fn has_input(&self) -> bool {
        self.file.is_some() || !self.text.trim().is_empty()
    }

    /// Submit gate: input present and no submission in flight. `Complete`
    /// counts as settled, so a new submission can start from there.
    pub(crate) fn can_submit(&self) -> bool {
        self.has_input() && matches!(self.phase, Phase::Idle | Phase::Complete)
    }

    /// Stores a toast and returns the effect that schedules its removal.
    pub(crate) fn push_toast(&mut self, message: impl Into<String>, kind: ToastKind) -> Effect {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        Effect::ExpireToast {
            toast_id: id,
            after: self.timings.toast_duration,
        }
    }

    pub(crate) fn remove_toast(&mut self, id: ToastId) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn view(&self) -> AppViewModel {
        let file_label = self
            .file
            .as_ref()
            .map(|file| file.name.clone())
            .unwrap_or_else(|| NO_FILE_PLACEHOLDER.to_string());
        let rows = self
            .rows
            .iter()
            .take(self.revealed)
            .map(|row| format!("✔ {} — {}", row.company, row.status))
            .collect();
        AppViewModel {
            file_label,
            company_count_label: self.company_count.map(company_count_label),
            force_update: self.force_update,
            submit_enabled: self.can_submit(),
            busy: matches!(self.phase, Phase::Submitting | Phase::RevealingResults),
            drop_hint: self.drop_hint,
            rows,
            downloads_visible: self.phase == Phase::Complete && self.links.is_some(),
            download_prompt: self.download_prompt,
            links: self.links.clone(),
            toasts: self.toasts.clone(),
        }
    }
}
