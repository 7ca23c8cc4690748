use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::intent::{IntentMode, PaymentIntent},
    services::address::is_valid_address,
};

/// Linear view state for one payment session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SessionState {
    AwaitingIntent,
    ReadyToSubmit,
    Submitted,
}

/// The submit gate: single source of truth for whether the submit action
/// is enabled. Derived on demand, never cached.
pub fn submit_gate(intent: &PaymentIntent) -> bool {
    is_valid_address(&intent.recipient_address)
        && !intent.amount.is_empty()
        && intent
            .amount
            .parse::<f64>()
            .map(|value| value > 0.0)
            .unwrap_or(false)
}

/// One in-flight payment flow. Owns its intent exclusively; nothing is
/// shared across sessions.
#[derive(Debug)]
pub struct PaymentSession {
    id: Uuid,
    intent: PaymentIntent,
    state: SessionState,
    in_flight: bool,
}

impl PaymentSession {
    pub fn new(intent: PaymentIntent) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            intent,
            state: SessionState::AwaitingIntent,
            in_flight: false,
        };
        session.refresh();
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn intent(&self) -> &PaymentIntent {
        &self.intent
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Gate is forced closed while a submission is in flight, so no two
    /// submits can race on the same session.
    pub fn can_submit(&self) -> bool {
        !self.in_flight && submit_gate(&self.intent)
    }

    pub fn set_amount(&mut self, amount: String) -> Result<(), AppError> {
        self.guard_editable()?;
        self.intent.amount = amount;
        self.refresh();
        Ok(())
    }

    /// The recipient is only editable on the manual flow; contact- and
    /// NFC-derived recipients are fixed for the life of the session.
    pub fn set_recipient(&mut self, address: String) -> Result<(), AppError> {
        self.guard_editable()?;
        if self.intent.mode != IntentMode::Manual {
            return Err(AppError::ValidationError(
                "recipient can only be edited in manual mode".to_string(),
            ));
        }
        if !address.is_empty() && !is_valid_address(&address) {
            return Err(AppError::InvalidAddress(address));
        }
        self.intent.recipient_address = address;
        self.refresh();
        Ok(())
    }

    /// Start a submission: checks the gate, marks the session in flight
    /// and returns a snapshot of the intent for the signing boundary.
    pub fn begin_submit(&mut self) -> Result<PaymentIntent, AppError> {
        if self.in_flight {
            return Err(AppError::SubmitInFlight);
        }
        if !submit_gate(&self.intent) {
            return Err(AppError::ValidationError(
                "payment is not ready to submit".to_string(),
            ));
        }
        self.in_flight = true;
        Ok(self.intent.clone())
    }

    /// Success callback from the signing boundary: the amount is cleared
    /// and the session resets for a possible follow-up payment.
    pub fn complete_submit(&mut self) {
        self.in_flight = false;
        self.transition(SessionState::Submitted);
        self.intent.amount.clear();
        self.transition(SessionState::AwaitingIntent);
    }

    /// Failure callback: back to ready, amount preserved so the user can
    /// retry without re-entering data.
    pub fn fail_submit(&mut self) {
        self.in_flight = false;
        self.refresh();
    }

    fn guard_editable(&self) -> Result<(), AppError> {
        if self.in_flight {
            return Err(AppError::SubmitInFlight);
        }
        Ok(())
    }

    /// Re-derive the awaiting/ready state from the gate after an edit.
    fn refresh(&mut self) {
        let next = if submit_gate(&self.intent) {
            SessionState::ReadyToSubmit
        } else {
            SessionState::AwaitingIntent
        };
        self.transition(next);
    }

    fn transition(&mut self, next: SessionState) {
        if self.state != next {
            log::info!(
                "session {}: {:?} -> {:?} (mode {:?})",
                self.id,
                self.state,
                next,
                self.intent.mode
            );
            self.state = next;
        }
    }
}

/// In-process session store keyed by session id.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, PaymentSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, session: PaymentSession) -> Result<Uuid, AppError> {
        let id = session.id();
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| AppError::InternalServerError)?;
        sessions.insert(id, session);
        Ok(id)
    }

    /// Run a closure against one session under the store lock.
    pub fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut PaymentSession) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| AppError::InternalServerError)?;
        let session = sessions
            .get_mut(&id)
            .ok_or(AppError::SessionNotFound(id))?;
        f(session)
    }
}
