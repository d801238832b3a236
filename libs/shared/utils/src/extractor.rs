use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use shared_models::auth::Account;
use shared_models::error::AppError;

pub const ACCOUNT_ID_HEADER: &str = "x-account-id";

/// Middleware resolving the acting account from the session provider
/// boundary. The provider is trusted: the header carries an already
/// authenticated account id, no credential is checked here.
pub async fn account_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(ACCOUNT_ID_HEADER)
        .ok_or_else(|| AppError::Auth("Missing account header".to_string()))?;

    let value = header
        .to_str()
        .map_err(|_| AppError::Auth("Invalid account header format".to_string()))?;

    let account_id = Uuid::parse_str(value)
        .map_err(|_| AppError::Auth("Invalid account id".to_string()))?;

    request.extensions_mut().insert(Account::new(account_id));

    Ok(next.run(request).await)
}
