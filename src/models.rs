use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RegisterReq {
    #[schema(example = "John", value_type = String)]
    pub first_name: String,
    #[schema(example = "Doe", value_type = String)]
    pub last_name: String,
    #[schema(example = "john@email.com", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "secret1", value_type = String)]
    pub password: String,
    /// One of: company, employee, admin
    #[serde(rename = "type")]
    #[schema(example = "employee", value_type = String)]
    pub user_type: String,
    #[schema(example = "en", value_type = Option<String>)]
    pub lang: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginReq {
    #[schema(example = "john@email.com", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "secret1", value_type = String)]
    pub password: String,
}
