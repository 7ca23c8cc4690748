use std::collections::HashMap;

use actix_web::{get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::{
    config::Config,
    errors::AppError,
    models::{
        api_response::{created_response, success_response},
        contact::ContactRecord,
        intent::{IntentMode, ModeDisplay, PaymentIntent},
    },
    services::{
        contacts_service::ContactDirectory,
        parser::{self, RecipientPolicy},
        resolver,
        session::{PaymentSession, SessionState, SessionStore},
        wallet_service::WalletService,
    },
};

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub intent: PaymentIntent,
    pub state: SessionState,
    pub can_submit: bool,
    pub display: ModeDisplay,
    pub recipient_short: String,
}

impl SessionView {
    fn from_session(session: &PaymentSession) -> Self {
        let intent = session.intent().clone();
        Self {
            session_id: session.id(),
            display: intent.mode.display(),
            recipient_short: intent.short_recipient(),
            state: session.state(),
            can_submit: session.can_submit(),
            intent,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AmountUpdate {
    pub amount: String,
}

#[derive(Debug, Deserialize)]
pub struct RecipientUpdate {
    pub address: String,
}

/// Host handshake: a liveness "ready" signal. Advertises the configured
/// network but carries nothing the intent pipeline depends on.
#[get("/health")]
async fn health(config: web::Data<Config>) -> HttpResponse {
    success_response(json!({
        "status": "ready",
        "chain_id": config.chain_id,
    }))
}

/// Entry point for URL-navigation and NFC-tap flows. The query string
/// carries the recognized keys `address`, `amount`, `name`, `mode`,
/// `token`. An `nfc` mode routes through the NFC parser; anything else is
/// a manual landing, which requires a recipient upfront.
#[get("/intent/resolve")]
async fn resolve_intent(
    query: web::Query<HashMap<String, String>>,
    store: web::Data<SessionStore>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let landing_mode = params
        .get("mode")
        .map(|mode| IntentMode::parse(mode))
        .unwrap_or_default();

    let candidate = match landing_mode {
        IntentMode::Nfc => parser::parse_nfc(&params)?,
        _ => parser::parse_query(&params, RecipientPolicy::RequireUpfront)?,
    };

    let session = PaymentSession::new(resolver::resolve(candidate));
    let view = SessionView::from_session(&session);
    store.insert(session)?;
    Ok(created_response(view))
}

#[get("/contacts")]
async fn list_contacts(directory: web::Data<ContactDirectory>) -> Result<HttpResponse, AppError> {
    let contacts = directory.list_contacts().await?;
    Ok(success_response(contacts))
}

/// Contact-initiated flow: the selected contact's address is re-validated
/// before a session is created.
#[post("/contacts/select")]
async fn select_contact(
    contact: web::Json<ContactRecord>,
    store: web::Data<SessionStore>,
) -> Result<HttpResponse, AppError> {
    let candidate = parser::parse_contact(&contact)?;
    let session = PaymentSession::new(resolver::resolve(candidate));
    let view = SessionView::from_session(&session);
    store.insert(session)?;
    Ok(created_response(view))
}

#[put("/session/{id}/amount")]
async fn update_amount(
    path: web::Path<Uuid>,
    update: web::Json<AmountUpdate>,
    store: web::Data<SessionStore>,
) -> Result<HttpResponse, AppError> {
    let view = store.update(path.into_inner(), |session| {
        session.set_amount(update.into_inner().amount)?;
        Ok(SessionView::from_session(session))
    })?;
    Ok(success_response(view))
}

#[put("/session/{id}/recipient")]
async fn update_recipient(
    path: web::Path<Uuid>,
    update: web::Json<RecipientUpdate>,
    store: web::Data<SessionStore>,
) -> Result<HttpResponse, AppError> {
    let view = store.update(path.into_inner(), |session| {
        session.set_recipient(update.into_inner().address)?;
        Ok(SessionView::from_session(session))
    })?;
    Ok(success_response(view))
}

/// Gate-checked hand-off to the wallet-signing boundary. A failure from
/// the signer returns the session to ready with the amount preserved, so
/// the caller can retry.
#[post("/session/{id}/submit")]
async fn submit_payment(
    path: web::Path<Uuid>,
    store: web::Data<SessionStore>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let intent = store.update(id, |session| session.begin_submit())?;

    let call = match WalletService::build_call(&intent) {
        Ok(call) => call,
        Err(e) => {
            store.update(id, |session| {
                session.fail_submit();
                Ok(())
            })?;
            return Err(e);
        }
    };

    match WalletService.submit_payment(call).await {
        Ok(receipt) => {
            let view = store.update(id, |session| {
                session.complete_submit();
                Ok(SessionView::from_session(session))
            })?;
            Ok(success_response(json!({
                "receipt": receipt,
                "session": view,
            })))
        }
        Err(e) => {
            store.update(id, |session| {
                session.fail_submit();
                Ok(())
            })?;
            Err(AppError::SigningFailed(e.to_string()))
        }
    }
}
