//! Three-step consultation request modal plus its success notice.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once in the app shell and driven by the shared
//! `RwSignal<ConsultationWizard>`. The modal owns the only network call on the
//! site: it takes a ticket from `begin_submit`, posts it, and hands the result
//! back through `finish_submit`. Step transitions and duplicate-submit
//! protection live in the state model.

use leptos::prelude::*;

use crate::state::consultation::{
    CLOSE_ANIMATION_MS, ConsultationWizard, ProjectType, Timeframe, WizardStep,
};
use crate::state::ui::UiState;

/// Start the close animation, then drop wizard state once it has played.
fn close_wizard(wizard: RwSignal<ConsultationWizard>) {
    let Some(generation) = wizard.try_update(ConsultationWizard::request_close).flatten() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(CLOSE_ANIMATION_MS).await;
        wizard.try_update(|w| w.finalize_close(generation));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = CLOSE_ANIMATION_MS;
        wizard.update(|w| w.finalize_close(generation));
    }
}

fn start_submit(wizard: RwSignal<ConsultationWizard>) {
    let Some(ticket) = wizard.try_update(ConsultationWizard::begin_submit).flatten() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let transport = crate::net::api::HttpTransport::from_config();
        let result = crate::net::api::submit(&transport, &ticket.request).await;
        wizard.try_update(|w| {
            w.finish_submit(ticket.generation, result);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ticket;
    }
}

#[component]
pub fn ConsultationModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let wizard = expect_context::<RwSignal<ConsultationWizard>>();
    let s = move || ui.get().strings();
    let step = Memo::new(move |_| wizard.with(ConsultationWizard::current_step));

    crate::util::keyboard::on_escape(move || {
        if wizard.with_untracked(ConsultationWizard::is_open) {
            close_wizard(wizard);
        }
    });
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        start_submit(wizard);
    };
    let backdrop_class = move || {
        if wizard.with(ConsultationWizard::is_closing) {
            "dialog-backdrop wizard-backdrop wizard-backdrop--closing"
        } else {
            "dialog-backdrop wizard-backdrop"
        }
    };

    view! {
        <Show when=move || wizard.with(ConsultationWizard::is_open)>
            <div class=backdrop_class on:click=move |_| close_wizard(wizard)>
                <div
                    class="dialog wizard"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div class="wizard__header">
                        <h2>{move || s().wizard_title}</h2>
                        <button
                            class="dialog__close"
                            title=move || s().close
                            on:click=move |_| close_wizard(wizard)
                        >
                            "✕"
                        </button>
                    </div>
                    <ol class="wizard__steps">
                        {[WizardStep::ProjectType, WizardStep::Details, WizardStep::Contact]
                            .into_iter()
                            .map(|item| {
                                let class = move || {
                                    if step.get() == Some(item) {
                                        "wizard__step wizard__step--active"
                                    } else if step.get().is_some_and(|current| current > item) {
                                        "wizard__step wizard__step--done"
                                    } else {
                                        "wizard__step"
                                    }
                                };
                                view! {
                                    <li class=class>
                                        <span class="wizard__step-number">{item.number()}</span>
                                        <span>{move || item.title(s())}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                    <p class="wizard__progress">
                        {move || {
                            format!(
                                "{} {} / 3",
                                s().wizard_step_label,
                                step.get().map_or(1, WizardStep::number),
                            )
                        }}
                    </p>
                    <form class="wizard__form" on:submit=on_submit>
                        {move || match step.get() {
                            Some(WizardStep::ProjectType) => project_type_step(wizard, ui).into_any(),
                            Some(WizardStep::Details) => details_step(wizard, ui).into_any(),
                            Some(WizardStep::Contact) | None => contact_step(wizard, ui).into_any(),
                        }}
                        {move || {
                            wizard
                                .with(|w| w.error_message(s()))
                                .map(|msg| view! { <p class="wizard__error" role="alert">{msg}</p> })
                        }}
                        <div class="dialog__actions">
                            <Show when=move || step.get().is_some_and(|st| st != WizardStep::ProjectType)>
                                <button
                                    type="button"
                                    class="btn"
                                    disabled=move || wizard.with(ConsultationWizard::is_submitting)
                                    on:click=move |_| {
                                        wizard.update(|w| {
                                            w.back();
                                        });
                                    }
                                >
                                    {move || s().back}
                                </button>
                            </Show>
                            <Show
                                when=move || step.get() == Some(WizardStep::Contact)
                                fallback=move || {
                                    view! {
                                        <button
                                            type="button"
                                            class="btn btn--primary"
                                            disabled=move || !wizard.with(ConsultationWizard::can_advance)
                                            on:click=move |_| {
                                                wizard.update(|w| {
                                                    w.next();
                                                });
                                            }
                                        >
                                            {move || s().next}
                                        </button>
                                    }
                                }
                            >
                                <button
                                    type="submit"
                                    class="btn btn--primary"
                                    disabled=move || {
                                        wizard.with(|w| w.is_submitting() || !w.form.contact_ready())
                                    }
                                >
                                    {move || {
                                        if wizard.with(ConsultationWizard::is_submitting) {
                                            s().submitting
                                        } else {
                                            s().submit
                                        }
                                    }}
                                </button>
                            </Show>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
        <Show when=move || wizard.with(ConsultationWizard::submitted)>
            <div class="toast toast--success" role="status">
                <span>{move || s().submit_success}</span>
                <button
                    class="toast__close"
                    title=move || s().close
                    on:click=move |_| wizard.update(ConsultationWizard::dismiss_notice)
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}

fn project_type_step(wizard: RwSignal<ConsultationWizard>, ui: RwSignal<UiState>) -> impl IntoView {
    let s = move || ui.get().strings();
    view! {
        <fieldset class="wizard__fieldset">
            <legend>{move || s().step_project_type}</legend>
            {ProjectType::ALL
                .into_iter()
                .map(|project_type| {
                    view! {
                        <label class="wizard__option">
                            <input
                                type="checkbox"
                                value=project_type.key()
                                prop:checked=move || {
                                    wizard.with(|w| w.form.project_types.contains(&project_type))
                                }
                                on:change=move |_| wizard.update(|w| w.toggle_project_type(project_type))
                            />
                            <span>{move || project_type.label(s())}</span>
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

fn details_step(wizard: RwSignal<ConsultationWizard>, ui: RwSignal<UiState>) -> impl IntoView {
    let s = move || ui.get().strings();
    view! {
        <fieldset class="wizard__fieldset">
            <legend>{move || s().step_details}</legend>
            <label class="wizard__field">
                <span>{move || s().field_location} " *"</span>
                <input
                    type="text"
                    required
                    prop:value=move || wizard.with(|w| w.form.location.clone())
                    on:input=move |ev| wizard.update(|w| w.set_location(event_target_value(&ev)))
                />
            </label>
            <label class="wizard__field">
                <span>{move || s().field_area}</span>
                <input
                    type="text"
                    inputmode="numeric"
                    prop:value=move || wizard.with(|w| w.form.area.clone())
                    on:input=move |ev| wizard.update(|w| w.set_area(&event_target_value(&ev)))
                />
            </label>
            <label class="wizard__field">
                <span>{move || s().field_timeframe}</span>
                <select
                    prop:value=move || wizard.with(|w| w.form.timeframe.map_or("", Timeframe::key))
                    on:change=move |ev| {
                        wizard.update(|w| w.set_timeframe(Timeframe::from_key(&event_target_value(&ev))))
                    }
                >
                    <option value="">{move || s().timeframe_unset}</option>
                    {Timeframe::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.key()>{move || t.label(s())}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="wizard__field">
                <span>{move || s().field_description} " *"</span>
                <textarea
                    rows="4"
                    required
                    prop:value=move || wizard.with(|w| w.form.description.clone())
                    on:input=move |ev| wizard.update(|w| w.set_description(event_target_value(&ev)))
                ></textarea>
            </label>
        </fieldset>
    }
}

fn contact_step(wizard: RwSignal<ConsultationWizard>, ui: RwSignal<UiState>) -> impl IntoView {
    let s = move || ui.get().strings();
    let locked = move || wizard.with(ConsultationWizard::is_submitting);
    view! {
        <fieldset class="wizard__fieldset" disabled=locked>
            <legend>{move || s().step_contact}</legend>
            <div class="wizard__row">
                <label class="wizard__field">
                    <span>{move || s().field_first_name} " *"</span>
                    <input
                        type="text"
                        autocomplete="given-name"
                        required
                        prop:value=move || wizard.with(|w| w.form.first_name.clone())
                        on:input=move |ev| wizard.update(|w| w.set_first_name(event_target_value(&ev)))
                    />
                </label>
                <label class="wizard__field">
                    <span>{move || s().field_last_name} " *"</span>
                    <input
                        type="text"
                        autocomplete="family-name"
                        required
                        prop:value=move || wizard.with(|w| w.form.last_name.clone())
                        on:input=move |ev| wizard.update(|w| w.set_last_name(event_target_value(&ev)))
                    />
                </label>
            </div>
            <label class="wizard__field">
                <span>{move || s().field_email} " *"</span>
                <input
                    type="email"
                    autocomplete="email"
                    required
                    prop:value=move || wizard.with(|w| w.form.email.clone())
                    on:input=move |ev| wizard.update(|w| w.set_email(event_target_value(&ev)))
                />
            </label>
            <label class="wizard__field">
                <span>{move || s().field_phone} " *"</span>
                <input
                    type="tel"
                    autocomplete="tel"
                    required
                    prop:value=move || wizard.with(|w| w.form.phone.clone())
                    on:input=move |ev| wizard.update(|w| w.set_phone(event_target_value(&ev)))
                />
            </label>
            <label class="wizard__field">
                <span>{move || s().field_company}</span>
                <input
                    type="text"
                    autocomplete="organization"
                    prop:value=move || wizard.with(|w| w.form.company.clone())
                    on:input=move |ev| wizard.update(|w| w.set_company(event_target_value(&ev)))
                />
            </label>
            <label class="wizard__option">
                <input
                    type="checkbox"
                    prop:checked=move || wizard.with(|w| w.form.newsletter)
                    on:change=move |ev| wizard.update(|w| w.set_newsletter(event_target_checked(&ev)))
                />
                <span>{move || s().field_newsletter}</span>
            </label>
        </fieldset>
    }
}
