use std::sync::Arc;

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};

use crate::core::error::AppError;
use crate::modules::loans::models::{CreateLoanRequest, LoanCreatedResponse};
use crate::modules::loans::services::LoanService;

/// Create a new loan
/// POST /api/v1/loans
pub async fn create_loan(
    service: web::Data<Arc<LoanService>>,
    request: web::Json<CreateLoanRequest>,
) -> Result<HttpResponse, AppError> {
    let loan = service.create_loan(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(LoanCreatedResponse::from(&loan)))
}

/// List all loans
/// GET /api/v1/loans
pub async fn list_loans(service: web::Data<Arc<LoanService>>) -> Result<HttpResponse, AppError> {
    let loans = service.list_loans().await?;

    Ok(HttpResponse::Ok().json(loans))
}

/// Get loan by ID
/// GET /api/v1/loans/{loan_id}
pub async fn get_loan(
    service: web::Data<Arc<LoanService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let loan = service.get_loan(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(loan))
}

/// Delete loan by ID
/// DELETE /api/v1/loans/{loan_id}
pub async fn delete_loan(
    service: web::Data<Arc<LoanService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_loan(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Loan deleted successfully"
    })))
}

/// Malformed or mistyped bodies are the caller's fault: 400 `{error}`
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected loan payload");
    AppError::validation(format!("Invalid loan payload: {}", err)).into()
}

/// Configure loan routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/loans")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("", web::post().to(create_loan))
            .route("", web::get().to(list_loans))
            .route("/{loan_id}", web::get().to(get_loan))
            .route("/{loan_id}", web::delete().to(delete_loan)),
    );
}
