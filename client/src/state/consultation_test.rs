use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::net::api::{ConsultationTransport, submit};

struct StubEndpoint {
    reply: Result<ConsultationAck, SubmitError>,
    calls: Cell<usize>,
}

impl StubEndpoint {
    fn replying(reply: Result<ConsultationAck, SubmitError>) -> Self {
        Self { reply, calls: Cell::new(0) }
    }
}

impl ConsultationTransport for StubEndpoint {
    async fn send(&self, _request: &ConsultationRequest) -> Result<ConsultationAck, SubmitError> {
        self.calls.set(self.calls.get() + 1);
        self.reply.clone()
    }
}

fn ack(success: bool, message: Option<&str>) -> ConsultationAck {
    ConsultationAck { success, message: message.map(str::to_owned) }
}

/// Wizard opened and filled through to the contact step.
fn wizard_at_contact(lock: &ScrollLock) -> ConsultationWizard {
    let mut w = ConsultationWizard::new(lock.clone());
    w.open();
    w.toggle_project_type(ProjectType::Civil);
    w.toggle_project_type(ProjectType::Buildings);
    assert!(w.next());
    w.set_location("Bandung".to_owned());
    w.set_description("Gudang dua lantai".to_owned());
    w.set_area("1.200 m2");
    w.set_timeframe(Some(Timeframe::WithinSixMonths));
    assert!(w.next());
    w.set_first_name("Sari".to_owned());
    w.set_last_name("Dewi".to_owned());
    w.set_email("sari@example.com".to_owned());
    w.set_phone("0812345678".to_owned());
    w.set_company("PT Maju".to_owned());
    w
}

fn run_submission(w: &mut ConsultationWizard, endpoint: &StubEndpoint) -> FinishOutcome {
    let ticket = w.begin_submit().expect("submission should start");
    let result = block_on(submit(endpoint, &ticket.request));
    w.finish_submit(ticket.generation, result)
}

// =============================================================
// Opening and step gating
// =============================================================

#[test]
fn default_wizard_is_closed() {
    let w = ConsultationWizard::default();
    assert_eq!(w.phase(), WizardPhase::Closed);
    assert!(!w.is_open());
    assert_eq!(w.current_step(), None);
    assert!(!w.can_advance());
}

#[test]
fn open_starts_at_step_one_with_empty_form() {
    let mut w = ConsultationWizard::default();
    w.set_first_name("stale".to_owned());
    w.open();
    assert_eq!(w.current_step(), Some(WizardStep::ProjectType));
    assert_eq!(w.form, ConsultationForm::default());
    assert!(w.error().is_none());
}

#[test]
fn next_from_step_one_requires_a_project_type() {
    let mut w = ConsultationWizard::default();
    w.open();
    assert!(!w.next());
    assert_eq!(w.current_step(), Some(WizardStep::ProjectType));

    w.toggle_project_type(ProjectType::Industrial);
    assert!(w.next());
    assert_eq!(w.current_step(), Some(WizardStep::Details));
}

#[test]
fn toggling_a_project_type_twice_deselects_it() {
    let mut w = ConsultationWizard::default();
    w.open();
    w.toggle_project_type(ProjectType::Civil);
    w.toggle_project_type(ProjectType::Civil);
    assert!(w.form.project_types.is_empty());
    assert!(!w.can_advance());
}

#[test]
fn next_from_details_requires_location_and_description() {
    let mut w = ConsultationWizard::default();
    w.open();
    w.toggle_project_type(ProjectType::Civil);
    w.next();

    w.set_location("Surabaya".to_owned());
    assert!(!w.next());
    w.set_description("   ".to_owned());
    assert!(!w.next());
    w.set_description("Jalan akses".to_owned());
    assert!(w.next());
    assert_eq!(w.current_step(), Some(WizardStep::Contact));
}

#[test]
fn next_on_last_step_does_not_leave_contact() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    assert!(!w.next());
    assert_eq!(w.current_step(), Some(WizardStep::Contact));
}

#[test]
fn back_keeps_entered_fields() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    let before = w.form.clone();
    assert!(w.back());
    assert_eq!(w.current_step(), Some(WizardStep::Details));
    assert!(w.back());
    assert_eq!(w.current_step(), Some(WizardStep::ProjectType));
    assert!(!w.back());
    assert_eq!(w.form, before);
}

#[test]
fn set_area_keeps_digits_only() {
    let mut w = ConsultationWizard::default();
    w.set_area("1.200 m2");
    assert_eq!(w.form.area, "12002");
    w.set_area("abc");
    assert_eq!(w.form.area, "");
}

#[test]
fn timeframe_keys_round_trip() {
    for t in Timeframe::ALL {
        assert_eq!(Timeframe::from_key(t.key()), Some(t));
    }
    assert_eq!(Timeframe::from_key(""), None);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn begin_submit_requires_contact_fields() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    w.set_phone(" ".to_owned());
    assert!(w.begin_submit().is_none());
    assert_eq!(w.phase(), WizardPhase::Editing(WizardStep::Contact));
}

#[test]
fn begin_submit_is_unreachable_before_step_three() {
    let mut w = ConsultationWizard::default();
    w.open();
    w.set_first_name("Sari".to_owned());
    w.set_last_name("Dewi".to_owned());
    w.set_email("sari@example.com".to_owned());
    w.set_phone("0812".to_owned());
    assert!(w.begin_submit().is_none());
}

#[test]
fn successful_submission_closes_and_clears_form() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    assert_eq!(lock.depth(), 1);

    let endpoint = StubEndpoint::replying(Ok(ack(true, None)));
    assert_eq!(run_submission(&mut w, &endpoint), FinishOutcome::Accepted);

    assert_eq!(w.phase(), WizardPhase::Closed);
    assert_eq!(w.form, ConsultationForm::default());
    assert!(w.submitted());
    assert_eq!(lock.depth(), 0);
    assert_eq!(endpoint.calls.get(), 1);
}

#[test]
fn rejected_submission_returns_to_contact_with_server_message() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    let endpoint = StubEndpoint::replying(Ok(ack(false, Some("x"))));
    assert_eq!(run_submission(&mut w, &endpoint), FinishOutcome::Failed);

    assert_eq!(w.phase(), WizardPhase::Editing(WizardStep::Contact));
    assert_eq!(w.form.first_name, "Sari");
    assert_eq!(w.form.last_name, "Dewi");
    assert_eq!(w.form.email, "sari@example.com");
    assert_eq!(w.form.phone, "0812345678");
    assert_eq!(w.error_message(strings(Locale::Id)).as_deref(), Some("x"));
    assert!(!w.submitted());
}

#[test]
fn rejected_submission_without_message_uses_generic_text() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    let endpoint = StubEndpoint::replying(Ok(ack(false, None)));
    run_submission(&mut w, &endpoint);
    let table = strings(Locale::Id);
    assert_eq!(w.error_message(table).as_deref(), Some(table.submit_failed));
}

#[test]
fn transport_failure_is_retryable_without_reentering_data() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    let down = StubEndpoint::replying(Err(SubmitError::Timeout(15_000)));
    assert_eq!(run_submission(&mut w, &down), FinishOutcome::Failed);
    let table = strings(Locale::En);
    assert_eq!(w.error_message(table).as_deref(), Some(table.submit_failed));

    let up = StubEndpoint::replying(Ok(ack(true, None)));
    assert_eq!(run_submission(&mut w, &up), FinishOutcome::Accepted);
    assert!(w.error().is_none());
}

#[test]
fn begin_submit_clears_previous_error() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    let ticket = w.begin_submit().expect("ticket");
    w.finish_submit(ticket.generation, Err(SubmitError::Status(502)));
    assert!(w.error().is_some());
    assert!(w.begin_submit().is_some());
    assert!(w.error().is_none());
}

#[test]
fn double_submit_sends_exactly_one_request() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    let endpoint = StubEndpoint::replying(Ok(ack(true, None)));

    let first = w.begin_submit();
    let second = w.begin_submit();
    assert!(w.is_submitting());
    assert!(second.is_none());

    let tickets = [first, second].into_iter().flatten().collect::<Vec<_>>();
    for ticket in &tickets {
        let result = block_on(submit(&endpoint, &ticket.request));
        w.finish_submit(ticket.generation, result);
    }
    assert_eq!(endpoint.calls.get(), 1);
}

#[test]
fn navigation_is_frozen_while_submitting() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    w.begin_submit().expect("ticket");
    assert!(!w.back());
    assert!(!w.next());
    assert_eq!(w.current_step(), Some(WizardStep::Contact));
}

// =============================================================
// Closing and cancellation
// =============================================================

#[test]
fn close_discards_state_after_animation() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    let generation = w.request_close().expect("closing");
    assert!(w.is_closing());
    assert!(w.is_open());
    w.finalize_close(generation);
    assert!(!w.is_open());
    assert!(!w.is_closing());
    assert_eq!(w.form, ConsultationForm::default());
    assert_eq!(lock.depth(), 0);
}

#[test]
fn finalize_close_without_request_is_ignored() {
    let mut w = ConsultationWizard::default();
    w.open();
    w.finalize_close(w.generation());
    assert!(w.is_open());
}

#[test]
fn stale_close_timer_does_not_cut_short_a_later_close() {
    let lock = ScrollLock::new();
    let mut w = ConsultationWizard::new(lock.clone());
    w.open();
    let first = w.request_close().expect("first close");
    w.open();
    let second = w.request_close().expect("second close");

    w.finalize_close(first);
    assert!(w.is_open());
    assert!(w.is_closing());
    assert_eq!(lock.depth(), 1);

    w.finalize_close(second);
    assert!(!w.is_open());
    assert_eq!(lock.depth(), 0);
}

#[test]
fn request_close_on_closed_wizard_is_noop() {
    let mut w = ConsultationWizard::default();
    let before = w.generation();
    assert_eq!(w.request_close(), None);
    assert_eq!(w.generation(), before);
}

#[test]
fn result_arriving_after_close_is_dropped() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    let ticket = w.begin_submit().expect("ticket");
    let generation = w.request_close().expect("closing");
    w.finalize_close(generation);

    let outcome = w.finish_submit(ticket.generation, Ok(ack(true, None)));
    assert_eq!(outcome, FinishOutcome::Stale);
    assert!(!w.submitted());
    assert_eq!(w.phase(), WizardPhase::Closed);
}

#[test]
fn result_from_previous_session_does_not_touch_reopened_wizard() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    let ticket = w.begin_submit().expect("ticket");
    let generation = w.request_close().expect("closing");
    w.finalize_close(generation);
    w.open();

    let outcome = w.finish_submit(ticket.generation, Err(SubmitError::Status(500)));
    assert_eq!(outcome, FinishOutcome::Stale);
    assert_eq!(w.current_step(), Some(WizardStep::ProjectType));
    assert!(w.error().is_none());
}

#[test]
fn begin_submit_refused_while_closing() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    let _ = w.request_close();
    assert!(w.begin_submit().is_none());
}

#[test]
fn open_close_cycle_leaves_scroll_lock_unchanged() {
    let lock = ScrollLock::new();
    let mut w = ConsultationWizard::new(lock.clone());
    w.open();
    w.open();
    assert_eq!(lock.depth(), 1);
    let generation = w.request_close().expect("closing");
    w.finalize_close(generation);
    assert_eq!(lock.depth(), 0);
}

// =============================================================
// Payload
// =============================================================

#[test]
fn build_request_formats_wire_payload() {
    let lock = ScrollLock::new();
    let w = wizard_at_contact(&lock);
    let req = build_request(&w.form);

    assert_eq!(req.name, "Sari Dewi");
    assert_eq!(req.email, "sari@example.com");
    assert_eq!(req.phone, "0812345678");
    assert_eq!(req.company, "PT Maju");
    assert_eq!(req.project_type, "Gedung, Sipil");
    assert_eq!(req.subject, "Permintaan Konsultasi Proyek - Gedung, Sipil");
    assert_eq!(
        req.project_details,
        "Lokasi: Bandung\nLuas: 12002 m²\nJadwal: Dalam 6 bulan\nDeskripsi:\nGudang dua lantai\nNewsletter: Tidak"
    );
}

#[test]
fn project_details_block_marks_missing_optional_fields() {
    let form = ConsultationForm {
        location: "Medan".to_owned(),
        description: "Ruko".to_owned(),
        newsletter: true,
        ..ConsultationForm::default()
    };
    let block = project_details_block(&form, strings(Locale::Id));
    assert!(block.contains("Luas: -\n"));
    assert!(block.contains("Jadwal: -\n"));
    assert!(block.ends_with("Newsletter: Ya"));
}

#[test]
fn project_type_summary_follows_locale() {
    let mut form = ConsultationForm::default();
    form.project_types.insert(ProjectType::Industrial);
    assert_eq!(project_type_summary(&form, strings(Locale::En)), "Industrial");
    assert_eq!(project_type_summary(&form, strings(Locale::Id)), "Industri");
}

#[test]
fn ticket_carries_current_generation() {
    let lock = ScrollLock::new();
    let mut w = wizard_at_contact(&lock);
    let generation = w.generation();
    let ticket = w.begin_submit().expect("ticket");
    assert_eq!(ticket.generation, generation);
    assert_eq!(ticket.request, build_request(&w.form));
}
