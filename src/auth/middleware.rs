use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    web::Data,
};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::error;

use crate::auth::basic::parse_basic_header;
use crate::auth::password::verify_password;
use crate::model::user::User;

/// Basic-authentication gate. Re-verifies credentials on every request —
/// there is no session or cache, each call pays one hash compare.
///
/// Denials are deliberately generic: a missing header, an unknown email, an
/// inactive account and a wrong password all produce the same 401 body.
pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let pool = req
        .app_data::<Data<MySqlPool>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Database pool missing"))?
        .clone();

    let creds = match req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(parse_basic_header)
    {
        Some(c) => c,
        None => {
            let resp = HttpResponse::Unauthorized()
                .json(json!({"status": false, "message": "Invalid credentials"}));
            return Ok(req.into_response(resp.map_into_boxed_body()));
        }
    };

    let user = match sqlx::query_as::<_, User>(
        "SELECT * FROM users WHERE email = ? AND is_active = 1",
    )
    .bind(&creds.email)
    .fetch_optional(pool.get_ref())
    .await
    {
        Ok(Some(user)) => user,
        Ok(None) => {
            let resp = HttpResponse::Unauthorized()
                .json(json!({"status": false, "message": "Invalid credentials"}));
            return Ok(req.into_response(resp.map_into_boxed_body()));
        }
        Err(e) => {
            error!(error = %e, "Database error while authenticating");
            let resp = HttpResponse::InternalServerError()
                .json(json!({"status": false, "message": format!("Database error: {}", e)}));
            return Ok(req.into_response(resp.map_into_boxed_body()));
        }
    };

    // checked before the password, same order as the login endpoint
    if !user.is_login_enable {
        let resp = HttpResponse::Forbidden()
            .json(json!({"status": false, "message": "Login is disabled for this account"}));
        return Ok(req.into_response(resp.map_into_boxed_body()));
    }

    if !verify_password(&creds.password, &user.password) {
        let resp = HttpResponse::Unauthorized()
            .json(json!({"status": false, "message": "Invalid credentials"}));
        return Ok(req.into_response(resp.map_into_boxed_body()));
    }

    req.extensions_mut().insert(user);

    next.call(req).await
}
