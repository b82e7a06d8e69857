//! "Notify me" form handshake.
//!
//! `NotifyForm` owns the submission state machine. The network call sits
//! behind [`NotifyTransport`] and every page mutation goes through
//! [`NotifyView`].

use async_trait::async_trait;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SharedError};

pub const ACCEPT_JSON: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// `Failed` behaves like `Idle`: the user may retry.
    pub fn accepts_submit(self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed)
    }

    pub fn is_terminal(self) -> bool {
        self == SubmissionState::Succeeded
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageTone {
    Success,
    Error,
}

impl MessageTone {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageTone::Success => "success",
            MessageTone::Error => "error",
        }
    }
}

/// User-facing strings for the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyCopy {
    pub submit_label: String,
    pub submitting_label: String,
    pub success_message: String,
    pub error_message: String,
}

impl Default for NotifyCopy {
    fn default() -> Self {
        Self {
            submit_label: "Avísame".to_string(),
            submitting_label: "Enviando...".to_string(),
            success_message: "¡Gracias! Te avisaremos en cuanto LePokedex esté disponible.".to_string(),
            error_message: "Oops, hubo un problema al enviar. Inténtalo de nuevo.".to_string(),
        }
    }
}

/// Ordered form fields, sent whole or not at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Maps an HTTP status to the form outcome; only 2xx counts as success.
pub fn classify_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SharedError::HttpRejected { status })
    }
}

#[async_trait(?Send)]
pub trait NotifyTransport {
    /// POSTs the payload and returns the response status. A request that
    /// never completes maps to `SharedError::TransportFailure`.
    async fn post_form(&self, endpoint: &str, payload: &FormPayload) -> Result<u16>;
}

pub trait NotifyView {
    fn set_submit_enabled(&mut self, enabled: bool);
    fn set_submit_label(&mut self, label: &str);
    fn show_message(&mut self, text: &str, tone: MessageTone);
    fn hide_form(&mut self);
    fn clear_fields(&mut self);
}

/// In-memory state of the form's visible parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyFace {
    pub submit_enabled: bool,
    pub submit_label: String,
    pub message: Option<(String, MessageTone)>,
    pub form_visible: bool,
    /// Bumped on every clear so controlled inputs know to reset.
    pub clear_generation: u32,
}

impl NotifyFace {
    pub fn new(copy: &NotifyCopy) -> Self {
        Self {
            submit_enabled: true,
            submit_label: copy.submit_label.clone(),
            message: None,
            form_visible: true,
            clear_generation: 0,
        }
    }
}

impl NotifyView for NotifyFace {
    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit_label = label.to_string();
    }

    fn show_message(&mut self, text: &str, tone: MessageTone) {
        self.message = Some((text.to_string(), tone));
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
    }

    fn clear_fields(&mut self) {
        self.clear_generation = self.clear_generation.wrapping_add(1);
    }
}

#[derive(Debug, Clone)]
pub struct NotifyForm {
    endpoint: String,
    copy: NotifyCopy,
    state: SubmissionState,
}

impl NotifyForm {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            copy: NotifyCopy::default(),
            state: SubmissionState::Idle,
        }
    }

    pub fn with_copy(mut self, copy: NotifyCopy) -> Self {
        self.copy = copy;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn copy(&self) -> &NotifyCopy {
        &self.copy
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Locks the submit control. Returns `false` (and touches nothing) when a
    /// request is already in flight or the form has already succeeded.
    pub fn begin<V: NotifyView + ?Sized>(&mut self, view: &mut V) -> bool {
        if !self.state.accepts_submit() {
            debug!("Ignoring submit while form is {:?}", self.state);
            return false;
        }
        self.state = SubmissionState::Submitting;
        view.set_submit_enabled(false);
        view.set_submit_label(&self.copy.submitting_label);
        true
    }

    /// Applies the settled request to the view.
    pub fn finish<V: NotifyView + ?Sized>(
        &mut self,
        response: Result<u16>,
        view: &mut V,
    ) -> SubmissionState {
        if self.state != SubmissionState::Submitting {
            debug!("Dropping response for form in state {:?}", self.state);
            return self.state;
        }

        match response.and_then(classify_status) {
            Ok(()) => {
                info!("Notify form accepted by {}", self.endpoint);
                self.state = SubmissionState::Succeeded;
                view.show_message(&self.copy.success_message, MessageTone::Success);
                view.hide_form();
                view.clear_fields();
                // The control stays disabled: a reload is the only way back.
            }
            Err(e) => {
                error!("Notify form submission failed: {}", e);
                self.state = SubmissionState::Failed;
                view.show_message(&self.copy.error_message, MessageTone::Error);
                view.set_submit_enabled(true);
                view.set_submit_label(&self.copy.submit_label);
            }
        }
        self.state
    }

    /// Full handshake: lock, send, settle.
    pub async fn submit<T, V>(
        &mut self,
        transport: &T,
        payload: &FormPayload,
        view: &mut V,
    ) -> SubmissionState
    where
        T: NotifyTransport + ?Sized,
        V: NotifyView + ?Sized,
    {
        if !self.begin(view) {
            return self.state;
        }
        let response = transport.post_form(&self.endpoint, payload).await;
        self.finish(response, view)
    }
}
