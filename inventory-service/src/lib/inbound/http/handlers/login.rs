use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::AccessToken;
use crate::domain::account::models::Credentials;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub const TOKEN_COOKIE_NAME: &str = "jwt";

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<([(HeaderName, String); 1], ApiSuccess<LoginResponseData>), ApiError> {
    let Json(body) = body?;
    let credentials = Credentials::parse(body.username, body.password)?;

    let access_token = state.account_service.login(credentials).await?;

    Ok((
        [(header::SET_COOKIE, token_cookie(&access_token, Utc::now()))],
        ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                message: "Login success".to_string(),
                token: access_token.token,
            },
        ),
    ))
}

/// HttpOnly cookie carrying the token, expiring with it.
fn token_cookie(access_token: &AccessToken, now: DateTime<Utc>) -> String {
    let max_age = (access_token.expires_at - now).num_seconds().max(0);

    format!(
        "{}={}; Path=/; HttpOnly; Max-Age={}; Expires={}",
        TOKEN_COOKIE_NAME,
        access_token.token,
        max_age,
        access_token
            .expires_at
            .format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub token: String,
}
