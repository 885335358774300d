//! Authentication middleware
//!
//! Staff sessions are bearer JWTs issued by the soil platform API. The
//! dashboard does not hold the signing secret: it checks that the token is
//! well formed and not expired, then forwards it with every upstream call.

use axum::{
    extract::Request,
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorDetail, ErrorResponse};

/// Authenticated staff session extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AdminSession {
    pub admin_id: String,
    pub email: Option<String>,
    /// Raw token, forwarded upstream
    pub token: String,
}

/// JWT claims issued by the soil platform API
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: i64,
}

/// Decode claims without verifying the signature; expiry is still enforced
pub fn inspect_token(token: &str) -> Result<AdminClaims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();

    decode::<AdminClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        })
}

/// Authentication middleware that requires a live bearer token
pub async fn auth_middleware(
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match bearer {
        Some(TypedHeader(authorization)) => authorization.token().to_string(),
        None => {
            return unauthorized_response("Missing or invalid Authorization header");
        }
    };

    let claims = match inspect_token(&token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!("Rejected bearer token: {}", err);
            return err.into_response();
        }
    };

    request.extensions_mut().insert(AdminSession {
        admin_id: claims.sub,
        email: claims.email,
        token,
    });

    next.run(request).await
}

/// Create unauthorized response
fn unauthorized_response(message: &str) -> Response {
    let error = ErrorResponse {
        error: ErrorDetail::new("UNAUTHORIZED", message),
    };

    (StatusCode::UNAUTHORIZED, Json(error)).into_response()
}

/// Extractor for the authenticated staff session
/// Use this in handlers behind `auth_middleware`
#[derive(Clone, Debug)]
pub struct CurrentAdmin(pub AdminSession);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentAdmin
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminSession>()
            .cloned()
            .map(CurrentAdmin)
            .ok_or_else(|| {
                let error = ErrorResponse {
                    error: ErrorDetail::new("UNAUTHORIZED", "Authentication required"),
                };
                (StatusCode::UNAUTHORIZED, Json(error))
            })
    }
}
