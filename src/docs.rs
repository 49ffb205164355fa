use crate::models::{LoginReq, RegisterReq};
use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accounts API",
        version = "1.0.0",
        description = r#"
## Accounts API

User registration, login, and profile management.

### 🔐 Security
Protected endpoints use **HTTP Basic authentication**: every request carries
`Authorization: Basic base64(email:password)` and is re-verified against the
stored password hash. There are no sessions or tokens.

### 📦 Response Format
All responses share the `{status, message, data?, errors?}` envelope.
User objects never include the password hash.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::auth::handlers::register,
        crate::auth::handlers::login,
        crate::auth::handlers::logout,

        crate::api::profile::get_profile,
        crate::api::profile::update_profile,

        crate::api::health::health,
    ),
    components(
        schemas(
            RegisterReq,
            LoginReq
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration, login and logout APIs"),
        (name = "Profile", description = "Profile retrieval and update APIs"),
        (name = "Health", description = "Service health probe"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "basic_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
        );
    }
}
