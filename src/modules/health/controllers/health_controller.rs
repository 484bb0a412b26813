use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use sqlx::SqlitePool;

/// Liveness body: the process answers, nothing else is checked
#[derive(Debug, Serialize)]
pub struct Liveness {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
}

/// Readiness body: whether the loan database answered `SELECT 1`
#[derive(Debug, Serialize)]
pub struct Readiness {
    pub ready: bool,
    pub database: &'static str,
}

/// GET / - Banner pointing at the loan API
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Bank Loan API is running. Use /api/v1/loans")
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(Liveness {
        status: "alive",
        service: env!("CARGO_PKG_NAME"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /ready
/// 503 until the loan database answers
pub async fn readiness_check(pool: web::Data<SqlitePool>) -> impl Responder {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(Readiness {
            ready: true,
            database: "up",
        }),
        Err(e) => {
            tracing::error!(error = %e, "Loan database not ready");
            HttpResponse::ServiceUnavailable().json(Readiness {
                ready: false,
                database: "down",
            })
        }
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
