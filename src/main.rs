use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use tappay_backend::{api, config::Config, services};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    // Shared state built once at startup and threaded through app data.
    let config_data = web::Data::new(config.clone());
    let store = web::Data::new(services::session::SessionStore::new());
    let contacts = web::Data::new(services::contacts_service::ContactDirectory::seeded());

    log::info!("starting on port {} (chain {})", port, config.chain_id);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT"])
            .allowed_headers(vec![
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ])
            .supports_credentials();
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
        App::new()
            .app_data(config_data.clone())
            .app_data(store.clone())
            .app_data(contacts.clone())
            .configure(api::config)
            .wrap(cors)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
