use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use api::{AnalysisClient, AnalysisResult};
use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use tracing::{debug, warn};

use crate::core::config::AppConfig;
use crate::core::{format, platform, timing};
use crate::t;

use super::controller::{SubmissionId, SubmissionOutcome, UploadConfig, UploadController, UploadState};
use super::intake;
use super::validator::FileCandidate;

type SenderSlot = Rc<RefCell<Option<UnboundedSender<UploadEvent>>>>;

#[component]
pub fn UploadForm(on_result: EventHandler<AnalysisResult>) -> Element {
    let app_config = try_use_context::<AppConfig>().unwrap_or_default();
    let client = use_hook(move || AnalysisClient::new(app_config.service.clone()));
    let controller = use_signal(|| UploadController::new(localized_config()));
    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));

    let coroutine = {
        let sender_slot = sender_slot.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<UploadEvent>| {
            let sender_slot = sender_slot.clone();
            let client = client.clone();
            let mut controller = controller;

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        UploadEvent::Picked(candidate) => {
                            if let Err(err) = controller.with_mut(|ctl| ctl.select(candidate)) {
                                debug!(error = %err, "selection not taken");
                            }
                        }
                        UploadEvent::Clear => {
                            if let Err(err) = controller.with_mut(|ctl| ctl.clear()) {
                                debug!(error = %err, "clear ignored");
                            }
                        }
                        UploadEvent::Submit => {
                            let Some(tx) = sender_slot.borrow().as_ref().cloned() else {
                                warn!("upload event loop has no sender; submit dropped");
                                continue;
                            };
                            let submission = match controller.with_mut(|ctl| ctl.submit()) {
                                Ok(submission) => submission,
                                Err(err) => {
                                    debug!(error = %err, "submit ignored");
                                    continue;
                                }
                            };

                            let id = submission.id();
                            let interval = controller.with(|ctl| ctl.config().progress_interval_ms);
                            let ticks = tx.clone();
                            let guard = timing::spawn_periodic(interval, move || {
                                let _ = ticks.unbounded_send(UploadEvent::Progress(id));
                            });
                            controller.with_mut(|ctl| ctl.attach_progress(id, guard));

                            let client = client.clone();
                            platform::spawn_future(async move {
                                let outcome = submission.run(&client).await;
                                let _ = tx.unbounded_send(UploadEvent::Resolved(outcome));
                            });
                        }
                        UploadEvent::Progress(id) => {
                            let _ = controller.with_mut(|ctl| ctl.advance_progress(id).map(|_| ()));
                        }
                        UploadEvent::Resolved(outcome) => {
                            if controller.with_mut(|ctl| ctl.resolve(outcome)).is_err() {
                                continue;
                            }
                            let finished = controller.with(|ctl| match ctl.state() {
                                UploadState::Succeeded(result) => Some(result.clone()),
                                _ => None,
                            });
                            if let Some(result) = finished {
                                on_result.call(result);
                            }
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let pick = move |files: Arc<dyn FileEngine>| {
        spawn(async move {
            if let Some(candidate) = intake::first_candidate(files).await {
                coroutine.send(UploadEvent::Picked(candidate));
            }
        });
    };

    let (state, has_field_error, can_submit) = controller.with(|ctl| {
        (
            ctl.state().clone(),
            ctl.field_error().is_some(),
            ctl.can_submit(),
        )
    });
    let is_submitting = state.is_submitting();
    let failure = match &state {
        UploadState::Failed { message, .. } => Some(message.clone()),
        _ => None,
    };
    let submit_label = match &state {
        UploadState::Submitting { progress, .. } => progress.clone(),
        _ => t!("upload-submit"),
    };

    let picker = match state.file() {
        None => rsx! {
            label {
                class: "upload-dropzone",
                ondragover: move |evt| evt.prevent_default(),
                ondrop: move |evt| {
                    evt.prevent_default();
                    if let Some(files) = evt.files() {
                        pick(files);
                    }
                },
                input {
                    r#type: "file",
                    class: "upload-dropzone__input",
                    accept: ".pdf,application/pdf",
                    multiple: false,
                    onchange: move |evt| {
                        if let Some(files) = evt.files() {
                            pick(files);
                        }
                    },
                }
                span { class: "upload-dropzone__icon", aria_hidden: "true", "⇪" }
                span { class: "upload-dropzone__prompt", {t!("upload-drop-prompt")} }
                span { class: "upload-dropzone__hint", {t!("upload-browse-hint")} }
            }
        },
        Some(file) => {
            let name = file.name().to_string();
            let size = format::format_megabytes(file.size_bytes());
            rsx! {
                div { class: "upload-file",
                    span { class: "upload-file__icon", aria_hidden: "true", "▤" }
                    div { class: "upload-file__meta",
                        p { class: "upload-file__name", "{name}" }
                        p { class: "upload-file__size", "{size}" }
                    }
                    if is_submitting {
                        span { class: "spinner", aria_hidden: "true" }
                    } else {
                        button {
                            r#type: "button",
                            class: "upload-file__remove",
                            aria_label: t!("upload-remove"),
                            onclick: move |_| coroutine.send(UploadEvent::Clear),
                            "✕"
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "upload-card",
            div { class: "upload-card__header",
                h3 { {t!("upload-title")} }
                span { class: "upload-card__badge", {t!("upload-pdf-only")} }
            }

            {picker}

            if has_field_error {
                p { class: "upload-card__error", role: "alert", {t!("upload-not-pdf")} }
            }
            if let Some(message) = failure {
                p { class: "upload-card__error", role: "alert", "{message}" }
            }

            button {
                r#type: "button",
                class: "button button--primary upload-card__submit",
                disabled: !can_submit,
                onclick: move |_| coroutine.send(UploadEvent::Submit),
                if is_submitting {
                    span { class: "spinner spinner--inverse", aria_hidden: "true" }
                }
                span { class: "upload-card__submit-label", aria_live: "polite", "{submit_label}" }
            }
        }
    }
}

fn localized_config() -> UploadConfig {
    UploadConfig {
        progress_messages: vec![
            t!("upload-progress-uploading"),
            t!("upload-progress-reading"),
            t!("upload-progress-extracting"),
            t!("upload-progress-comparing"),
            t!("upload-progress-summarising"),
        ],
        failure_message: t!("upload-failed"),
        ..UploadConfig::default()
    }
}

#[derive(Debug, Clone)]
enum UploadEvent {
    Picked(FileCandidate),
    Clear,
    Submit,
    Progress(SubmissionId),
    Resolved(SubmissionOutcome),
}
