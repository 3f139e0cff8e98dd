//! Reducer
//!
//! Pure transition function: (state, message) -> (new state?, effects).
//! No I/O and no clock; the controller runs the effects.

use crate::logic::validate::{address_request, code_request, SubmitError};
use crate::models::{AuditRequest, Notification, Tab};
use super::intent::{Effect, Intent, Message};
use super::state::PageState;

#[derive(Debug, Default)]
pub struct Transition {
    /// `None` leaves the state untouched
    pub state: Option<PageState>,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged() -> Self {
        Self::default()
    }

    fn to(state: PageState) -> Self {
        Self {
            state: Some(state),
            effects: Vec::new(),
        }
    }

    fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

pub fn reduce(state: &PageState, message: Message) -> Transition {
    match message {
        Message::Intent(intent) => reduce_intent(state, intent),
        Message::AuditCompleted { request_id, request, result } => {
            if !state.is_loading || request_id != state.request_id {
                tracing::debug!(
                    "Dropping stale audit result {} (current {})",
                    request_id,
                    state.request_id
                );
                return Transition::unchanged();
            }

            let mut next = state.clone();
            next.audit_result = Some(*result);
            next.is_loading = false;
            next.active_tab = Tab::AuditResults;

            Transition::to(next).with(Effect::Notify(completion_notification(&request)))
        }
    }
}

fn reduce_intent(state: &PageState, intent: Intent) -> Transition {
    match intent {
        Intent::SelectTab { tab } => {
            if tab == state.active_tab {
                return Transition::unchanged();
            }
            let mut next = state.clone();
            next.active_tab = tab;
            Transition::to(next)
        }
        Intent::EditCode { code } => {
            let mut next = state.clone();
            next.contract_code = code;
            Transition::to(next)
        }
        Intent::SetFileName { file_name } => {
            let mut next = state.clone();
            next.file_name = file_name;
            Transition::to(next)
        }
        Intent::UploadFile { file_name, contents } => {
            let mut next = state.clone();
            next.file_name = file_name;
            next.contract_code = contents;
            Transition::to(next)
        }
        Intent::EditAddress { address } => {
            let mut next = state.clone();
            next.contract_address = address;
            Transition::to(next)
        }
        Intent::SubmitCode => submit(state, code_request(&state.contract_code, &state.file_name)),
        Intent::SubmitAddress => submit(state, address_request(&state.contract_address)),
    }
}

fn submit(state: &PageState, request: Result<AuditRequest, SubmitError>) -> Transition {
    if !state.can_submit() {
        tracing::debug!("Audit {} already in flight, ignoring submit", state.request_id);
        return Transition::unchanged();
    }

    let request = match request {
        Ok(request) => request,
        Err(e) => {
            tracing::info!("Submission rejected: {}", e);
            return Transition::unchanged().with(Effect::Notify(e.notification()));
        }
    };

    let mut next = state.clone();
    next.is_loading = true;
    next.audit_result = None;
    next.audit_source = Some(request.source());
    next.request_id = state.request_id + 1;

    let request_id = next.request_id;
    Transition::to(next).with(Effect::StartAudit { request_id, request })
}

fn completion_notification(request: &AuditRequest) -> Notification {
    Notification::info(
        "Audit Complete!",
        format!(
            "Security audit for {} finished. Check the results tab.",
            request.subject()
        ),
    )
}
