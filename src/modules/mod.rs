use actix_web::web;

pub mod health;
pub mod loans;

/// Register every HTTP route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(loans::configure).configure(health::configure);
}
