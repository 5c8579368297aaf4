use auth::Claims;
use auth::JwtError;
use auth::ADMIN_ROLE;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use thiserror::Error;

use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

/// Identity established by a verified token, stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
    pub claims: Claims,
}

/// Rejections produced by the access gate before any handler runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Invalid Authorization header format. Expected: Bearer <token>")]
    InvalidHeader,

    #[error("Invalid or expired token")]
    InvalidToken(#[source] JwtError),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Insufficient role")]
    Forbidden,
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let status = match self {
            GateError::Forbidden => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        };

        (status, Json(MessageData::new(self.to_string()))).into_response()
    }
}

/// First stage: verify the bearer token and record the principal.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, GateError> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "JWT validation failed");
        GateError::InvalidToken(e)
    })?;

    req.extensions_mut().insert(AuthenticatedPrincipal { claims });

    Ok(next.run(req).await)
}

/// Second stage: only admins reach inventory handlers.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, GateError> {
    let principal = req
        .extensions()
        .get::<AuthenticatedPrincipal>()
        .ok_or(GateError::Unauthenticated)?;

    if !principal.claims.has_role(ADMIN_ROLE) {
        tracing::warn!(
            username = %principal.claims.username,
            role = %principal.claims.role,
            "Rejected non-admin principal"
        );
        return Err(GateError::Forbidden);
    }

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, GateError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or(GateError::MissingHeader)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| GateError::InvalidHeader)?;

    auth_str
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or(GateError::InvalidHeader)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request_with_header(value: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/product");
        if let Some(value) = value {
            builder = builder.header(http::header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_token() {
        let req = request_with_header(Some("Bearer abc.def.ghi"));
        assert_eq!(extract_token_from_header(&req), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_extract_token_rejections() {
        assert_eq!(
            extract_token_from_header(&request_with_header(None)),
            Err(GateError::MissingHeader)
        );
        assert_eq!(
            extract_token_from_header(&request_with_header(Some("Basic dXNlcjpwYXNz"))),
            Err(GateError::InvalidHeader)
        );
        assert_eq!(
            extract_token_from_header(&request_with_header(Some("Bearer "))),
            Err(GateError::InvalidHeader)
        );
    }

    #[test]
    fn test_gate_error_status_codes() {
        assert_eq!(
            GateError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            GateError::InvalidToken(JwtError::Expired)
                .into_response()
                .status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GateError::Unauthenticated.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
