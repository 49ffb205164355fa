use actix_web::{HttpResponse, web};
use serde_json::{Value, json};
use sqlx::MySqlPool;
use tracing::info;

use crate::{
    auth::auth::AuthedUser,
    errors::AppError,
    model::user::User,
    utils::db_utils::{build_profile_update, execute_update},
    validate,
};

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Profile fetched", body = Object, example = json!({
            "status": true,
            "message": "Profile fetched successfully",
            "data": { "user": { "id": 1, "email": "john@email.com", "subscription": "Basic", "plan": 0 } }
        })),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Login disabled")
    ),
    tag = "Profile",
    security(("basic_auth" = []))
)]
pub async fn get_profile(auth: AuthedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(json!({
        "status": true,
        "message": "Profile fetched successfully",
        "data": { "user": auth.0 }
    })))
}

/// Partial profile update. The body may carry any subset of the mutable
/// fields; everything else is ignored by the update builder.
#[utoipa::path(
    put,
    path = "/api/profile",
    request_body(content = Object, example = json!({
        "first_name": "John",
        "subscription": "Silver",
        "dark_mode": true
    })),
    responses(
        (status = 200, description = "Profile updated", body = Object, example = json!({
            "status": true,
            "message": "Profile updated successfully",
            "data": { "user": { "id": 1, "subscription": "Silver", "plan": 1 } }
        })),
        (status = 400, description = "Validation failed or no fields provided"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Profile",
    security(("basic_auth" = []))
)]
pub async fn update_profile(
    auth: AuthedUser,
    pool: web::Data<MySqlPool>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    validate::validate_profile_update(&body)?;

    let update = build_profile_update(auth.0.id, &body)?;
    execute_update(pool.get_ref(), update).await?;

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(auth.0.id)
        .fetch_one(pool.get_ref())
        .await?;

    info!(user_id = user.id, "Profile updated");

    Ok(HttpResponse::Ok().json(json!({
        "status": true,
        "message": "Profile updated successfully",
        "data": { "user": user }
    })))
}
