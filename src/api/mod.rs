use actix_web::web;
mod handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(handlers::health)
            .service(handlers::resolve_intent)
            .service(handlers::list_contacts)
            .service(handlers::select_contact)
            .service(handlers::update_amount)
            .service(handlers::update_recipient)
            .service(handlers::submit_payment),
    );
}
