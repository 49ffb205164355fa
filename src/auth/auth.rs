use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, error::ErrorUnauthorized};
use futures::future::{Ready, ready};

use crate::model::user::User;

/// The authenticated user, placed into request extensions by the gate.
/// Carries the full row, digest included; handlers rely on the entity's
/// serialization rules to keep the digest out of responses.
pub struct AuthedUser(pub User);

impl FromRequest for AuthedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<User>() {
            Some(user) => ready(Ok(AuthedUser(user.clone()))),
            None => ready(Err(ErrorUnauthorized("Invalid credentials"))),
        }
    }
}
