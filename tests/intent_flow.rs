use actix_web::{test, web, App};
use serde_json::Value;

use tappay_backend::api;
use tappay_backend::config::Config;
use tappay_backend::services::contacts_service::ContactDirectory;
use tappay_backend::services::session::SessionStore;

const ADDR: &str = "0x742d35Cc6634C0532925a3b8D4bC5DbFADbE7c72";

fn test_config() -> Config {
    Config {
        port: 0,
        chain_id: 8453,
        allowed_origins: vec![],
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_config()))
                .app_data(web::Data::new(SessionStore::new()))
                .app_data(web::Data::new(ContactDirectory::seeded()))
                .configure(api::config),
        )
        .await
    };
}

#[actix_web::test]
async fn health_signals_ready() {
    let app = init_app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/health").to_request())
        .await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"]["status"], "ready");
    assert_eq!(body["result"]["chain_id"], 8453);
}

#[actix_web::test]
async fn manual_link_resolves_to_ready_session() {
    let app = init_app!();
    let uri = format!("/api/v1/intent/resolve?address={}&amount=0.01&mode=manual", ADDR);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    let session = &body["result"];
    assert_eq!(session["intent"]["recipient_address"], ADDR);
    assert_eq!(session["intent"]["amount"], "0.01");
    assert_eq!(session["intent"]["mode"], "manual");
    assert_eq!(session["can_submit"], true);
    assert_eq!(session["state"], "ReadyToSubmit");
    assert_eq!(session["recipient_short"], "0x742d...7c72");
}

#[actix_web::test]
async fn malformed_address_is_rejected() {
    let app = init_app!();
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/intent/resolve?address=not-an-address&mode=nfc")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "FAILURE");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid address"));
}

#[actix_web::test]
async fn bogus_mode_normalizes_to_manual() {
    let app = init_app!();
    let uri = format!("/api/v1/intent/resolve?address={}&mode=bogus", ADDR);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"]["intent"]["mode"], "manual");
}

#[actix_web::test]
async fn manual_landing_requires_recipient() {
    let app = init_app!();
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/intent/resolve?amount=1")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("No recipient address"));
}

#[actix_web::test]
async fn partial_nfc_link_awaits_input() {
    let app = init_app!();
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/intent/resolve?mode=nfc&amount=0.5")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"]["state"], "AwaitingIntent");
    assert_eq!(body["result"]["can_submit"], false);
    assert_eq!(body["result"]["intent"]["mode"], "nfc");
    assert_eq!(body["result"]["display"]["title"], "NFC Payment");
}

#[actix_web::test]
async fn contact_with_bad_address_is_rejected() {
    let app = init_app!();
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/contacts/select")
            .set_json(serde_json::json!({
                "id": "c-9",
                "name": "John Doe",
                "email": "john@example.com",
                "walletAddress": "0x8ba1f109551bD432803012645Hac136c91DCF43F",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn contact_selection_creates_session() {
    let app = init_app!();
    let contacts_resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/contacts").to_request(),
    )
    .await;
    let contacts: Value = test::read_body_json(contacts_resp).await;
    let first = contacts["result"][0].clone();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/contacts/select")
            .set_json(first)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"]["intent"]["mode"], "contact");
    assert_eq!(body["result"]["intent"]["recipient_display_name"], "Jane Roe");
    // amount still to be entered
    assert_eq!(body["result"]["can_submit"], false);
}

#[actix_web::test]
async fn nfc_tap_to_submitted_payment() {
    let app = init_app!();
    let uri = format!("/api/v1/intent/resolve?address={}&mode=nfc", ADDR);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["result"]["session_id"].as_str().unwrap().to_string();

    // user enters the amount
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/session/{}/amount", id))
            .set_json(serde_json::json!({ "amount": "0.01" }))
            .to_request(),
    )
    .await;
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["result"]["state"], "ReadyToSubmit");
    assert_eq!(updated["result"]["can_submit"], true);

    // submit through the signing boundary
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/session/{}/submit", id))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let submitted: Value = test::read_body_json(resp).await;
    let hash = submitted["result"]["receipt"]["transaction_hash"]
        .as_str()
        .unwrap();
    assert!(hash.starts_with("0x"));
    assert!(submitted["result"]["receipt"]["explorer_url"]
        .as_str()
        .unwrap()
        .contains("basescan.org/tx/"));

    // session reset for a follow-up payment, amount cleared
    assert_eq!(submitted["result"]["session"]["state"], "AwaitingIntent");
    assert_eq!(submitted["result"]["session"]["intent"]["amount"], "");
}

#[actix_web::test]
async fn submit_is_gated() {
    let app = init_app!();
    let uri = format!("/api/v1/intent/resolve?address={}&mode=nfc", ADDR);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["result"]["session_id"].as_str().unwrap().to_string();

    // no amount entered yet
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/session/{}/submit", id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn recipient_is_locked_outside_manual_mode() {
    let app = init_app!();
    let uri = format!("/api/v1/intent/resolve?address={}&mode=nfc", ADDR);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["result"]["session_id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/session/{}/recipient", id))
            .set_json(serde_json::json!({ "address": ADDR }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn unknown_session_is_not_found() {
    let app = init_app!();
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/session/00000000-0000-0000-0000-000000000000/submit")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}
