//! Consultation-request wizard: three gated steps, then one submission.
//!
//! DESIGN
//! ======
//! The wizard is a plain reducer over `ConsultationWizard`; the modal
//! component owns it inside a signal and performs the network call between
//! `begin_submit` and `finish_submit`. Each open/close bumps `generation`,
//! which doubles as the cancellation token: results that come back for an
//! older generation are dropped.
//!
//! ```text
//!            open()
//! Closed ───────────► Step1 ──next──► Step2 ──next──► Step3
//!   ▲                   ◄──back───      ◄──back───     │ begin_submit
//!   │ success                                           ▼
//!   └───────────────────────────────────────────── Submitting
//!                                 failure: back to Step3 ┘
//! ```

#[cfg(test)]
#[path = "consultation_test.rs"]
mod consultation_test;

use std::collections::BTreeSet;

use crate::i18n::{Locale, SiteStrings, strings};
use crate::net::api::SubmitError;
use crate::net::types::{ConsultationAck, ConsultationRequest};
use crate::state::overlay::{OverlaySlot, ScrollLock};

/// Delay between a close request and the reset, matching the exit animation.
pub const CLOSE_ANIMATION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProjectType {
    Buildings,
    Civil,
    Industrial,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [Self::Buildings, Self::Civil, Self::Industrial];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Buildings => "buildings",
            Self::Civil => "civil",
            Self::Industrial => "industrial",
        }
    }

    #[must_use]
    pub fn label(self, strings: &SiteStrings) -> &'static str {
        match self {
            Self::Buildings => strings.project_buildings,
            Self::Civil => strings.project_civil,
            Self::Industrial => strings.project_industrial,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timeframe {
    Immediate,
    WithinThreeMonths,
    WithinSixMonths,
    WithinYear,
    Planning,
}

impl Timeframe {
    pub const ALL: [Timeframe; 5] = [
        Self::Immediate,
        Self::WithinThreeMonths,
        Self::WithinSixMonths,
        Self::WithinYear,
        Self::Planning,
    ];

    /// Stable value used by the `<select>` element.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::WithinThreeMonths => "3-months",
            Self::WithinSixMonths => "6-months",
            Self::WithinYear => "1-year",
            Self::Planning => "planning",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    #[must_use]
    pub fn label(self, strings: &SiteStrings) -> &'static str {
        match self {
            Self::Immediate => strings.timeframe_immediate,
            Self::WithinThreeMonths => strings.timeframe_three_months,
            Self::WithinSixMonths => strings.timeframe_six_months,
            Self::WithinYear => strings.timeframe_year,
            Self::Planning => strings.timeframe_planning,
        }
    }
}

/// Fields collected across the three steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsultationForm {
    pub project_types: BTreeSet<ProjectType>,
    pub description: String,
    pub location: String,
    /// Digits only; anything else typed into the field is dropped.
    pub area: String,
    pub timeframe: Option<Timeframe>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub newsletter: bool,
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

impl ConsultationForm {
    #[must_use]
    pub fn project_type_ready(&self) -> bool {
        !self.project_types.is_empty()
    }

    #[must_use]
    pub fn details_ready(&self) -> bool {
        filled(&self.location) && filled(&self.description)
    }

    #[must_use]
    pub fn contact_ready(&self) -> bool {
        filled(&self.first_name) && filled(&self.last_name) && filled(&self.email) && filled(&self.phone)
    }

    #[must_use]
    pub fn step_ready(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::ProjectType => self.project_type_ready(),
            WizardStep::Details => self.details_ready(),
            WizardStep::Contact => self.contact_ready(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    ProjectType = 1,
    Details = 2,
    Contact = 3,
}

impl WizardStep {
    #[must_use]
    pub fn number(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn title(self, strings: &SiteStrings) -> &'static str {
        match self {
            Self::ProjectType => strings.step_project_type,
            Self::Details => strings.step_details,
            Self::Contact => strings.step_contact,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::ProjectType => Some(Self::Details),
            Self::Details => Some(Self::Contact),
            Self::Contact => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            Self::ProjectType => None,
            Self::Details => Some(Self::ProjectType),
            Self::Contact => Some(Self::Details),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardPhase {
    #[default]
    Closed,
    Editing(WizardStep),
    Submitting,
}

/// Handed out by `begin_submit`; the result must come back with the same generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    pub generation: u64,
    pub request: ConsultationRequest,
}

/// What `finish_submit` did with a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishOutcome {
    Accepted,
    Failed,
    Stale,
}

#[derive(Clone, Debug, Default)]
pub struct ConsultationWizard {
    phase: WizardPhase,
    pub form: ConsultationForm,
    error: Option<SubmitError>,
    closing: bool,
    generation: u64,
    submitted: bool,
    slot: OverlaySlot,
}

impl ConsultationWizard {
    #[must_use]
    pub fn new(lock: ScrollLock) -> Self {
        Self { slot: OverlaySlot::new(lock), ..Self::default() }
    }

    #[must_use]
    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != WizardPhase::Closed
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == WizardPhase::Submitting
    }

    /// Step shown on screen. `Submitting` keeps the contact step visible.
    #[must_use]
    pub fn current_step(&self) -> Option<WizardStep> {
        match self.phase {
            WizardPhase::Closed => None,
            WizardPhase::Editing(step) => Some(step),
            WizardPhase::Submitting => Some(WizardStep::Contact),
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn error(&self) -> Option<&SubmitError> {
        self.error.as_ref()
    }

    /// Inline error text, localized for everything except server messages.
    #[must_use]
    pub fn error_message(&self, strings: &SiteStrings) -> Option<String> {
        self.error.as_ref().map(|e| e.user_message(strings.submit_failed))
    }

    /// Whether the most recent submission succeeded (drives the success notice).
    #[must_use]
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn dismiss_notice(&mut self) {
        self.submitted = false;
    }

    /// Start a fresh wizard at step 1 with an empty form.
    pub fn open(&mut self) {
        self.generation += 1;
        self.phase = WizardPhase::Editing(WizardStep::ProjectType);
        self.form = ConsultationForm::default();
        self.error = None;
        self.closing = false;
        self.submitted = false;
        self.slot.hold();
    }

    pub fn toggle_project_type(&mut self, project_type: ProjectType) {
        if !self.form.project_types.remove(&project_type) {
            self.form.project_types.insert(project_type);
        }
    }

    pub fn set_description(&mut self, value: String) {
        self.form.description = value;
    }

    pub fn set_location(&mut self, value: String) {
        self.form.location = value;
    }

    pub fn set_area(&mut self, value: &str) {
        self.form.area = value.chars().filter(char::is_ascii_digit).collect();
    }

    pub fn set_timeframe(&mut self, value: Option<Timeframe>) {
        self.form.timeframe = value;
    }

    pub fn set_first_name(&mut self, value: String) {
        self.form.first_name = value;
    }

    pub fn set_last_name(&mut self, value: String) {
        self.form.last_name = value;
    }

    pub fn set_phone(&mut self, value: String) {
        self.form.phone = value;
    }

    pub fn set_email(&mut self, value: String) {
        self.form.email = value;
    }

    pub fn set_company(&mut self, value: String) {
        self.form.company = value;
    }

    pub fn set_newsletter(&mut self, value: bool) {
        self.form.newsletter = value;
    }

    /// Whether the visible step's required fields are filled.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        match self.phase {
            WizardPhase::Editing(step) => self.form.step_ready(step),
            WizardPhase::Closed | WizardPhase::Submitting => false,
        }
    }

    /// Move forward one step when the current step is complete.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        let WizardPhase::Editing(step) = self.phase else {
            return false;
        };
        match step.next() {
            Some(next) => {
                self.phase = WizardPhase::Editing(next);
                true
            }
            None => false,
        }
    }

    /// Move back one step. Entered fields are kept.
    pub fn back(&mut self) -> bool {
        if let WizardPhase::Editing(step) = self.phase {
            if let Some(prev) = step.prev() {
                self.phase = WizardPhase::Editing(prev);
                return true;
            }
        }
        false
    }

    /// Enter `Submitting` and hand out the payload. Returns `None` unless the
    /// contact step is complete and no request is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.closing || self.phase != WizardPhase::Editing(WizardStep::Contact) {
            return None;
        }
        if !self.form.contact_ready() {
            return None;
        }
        self.phase = WizardPhase::Submitting;
        self.error = None;
        Some(SubmitTicket { generation: self.generation, request: build_request(&self.form) })
    }

    /// Apply the result of a submission started with `begin_submit`.
    pub fn finish_submit(
        &mut self,
        generation: u64,
        result: Result<ConsultationAck, SubmitError>,
    ) -> FinishOutcome {
        if generation != self.generation || self.phase != WizardPhase::Submitting {
            log::debug!("dropping consultation result for generation {generation}");
            return FinishOutcome::Stale;
        }
        match result {
            Ok(ack) if ack.success => {
                self.reset();
                self.submitted = true;
                FinishOutcome::Accepted
            }
            Ok(ack) => self.fail(SubmitError::Rejected(ack.message)),
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: SubmitError) -> FinishOutcome {
        self.phase = WizardPhase::Editing(WizardStep::Contact);
        self.error = Some(error);
        FinishOutcome::Failed
    }

    /// Begin closing. Any in-flight result is orphaned from here on; the
    /// caller runs `finalize_close` with the returned generation once the
    /// exit animation has played. `None` when already closed or closing.
    pub fn request_close(&mut self) -> Option<u64> {
        if !self.is_open() || self.closing {
            return None;
        }
        self.closing = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Discard all in-progress state, but only for the close that issued
    /// `generation`. A timer left over from an earlier close is ignored.
    pub fn finalize_close(&mut self, generation: u64) {
        if self.closing && generation == self.generation {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.phase = WizardPhase::Closed;
        self.form = ConsultationForm::default();
        self.error = None;
        self.closing = false;
        self.slot.release();
    }
}

/// Display string for the selected project types, in enum order.
#[must_use]
pub fn project_type_summary(form: &ConsultationForm, strings: &SiteStrings) -> String {
    form.project_types
        .iter()
        .map(|t| t.label(strings))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Free-text block carrying the details step plus newsletter opt-in.
#[must_use]
pub fn project_details_block(form: &ConsultationForm, strings: &SiteStrings) -> String {
    let area = if form.area.is_empty() {
        "-".to_owned()
    } else {
        format!("{} m²", form.area)
    };
    let timeframe = form.timeframe.map_or("-", |t| t.label(strings));
    let newsletter = if form.newsletter { "Ya" } else { "Tidak" };
    format!(
        "Lokasi: {}\nLuas: {area}\nJadwal: {timeframe}\nDeskripsi:\n{}\nNewsletter: {newsletter}",
        form.location.trim(),
        form.description.trim(),
    )
}

/// Build the wire payload. Labels always use the Indonesian table so the
/// receiving inbox sees one language regardless of the visitor's locale.
#[must_use]
pub fn build_request(form: &ConsultationForm) -> ConsultationRequest {
    let table = strings(Locale::Id);
    let project_type = project_type_summary(form, table);
    ConsultationRequest {
        name: format!("{} {}", form.first_name.trim(), form.last_name.trim()).trim().to_owned(),
        email: form.email.trim().to_owned(),
        phone: form.phone.trim().to_owned(),
        company: form.company.trim().to_owned(),
        project_details: project_details_block(form, table),
        subject: format!("Permintaan Konsultasi Proyek - {project_type}"),
        project_type,
    }
}
