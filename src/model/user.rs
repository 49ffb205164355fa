use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Row of the `users` table.
///
/// The password digest rides along for credential verification but is
/// stripped from every serialized response via `skip_serializing`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub user_type: String,
    pub company_id: Option<String>,
    pub subscription: String,
    pub plan: i32,
    pub lang: String,
    pub avatar: String,
    pub is_active: bool,
    pub is_login_enable: bool,
    pub dark_mode: bool,
    pub messenger_color: String,
    pub is_disable: bool,
    pub created_by: i64,
    pub last_login: Option<NaiveDateTime>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Subscription tier. `plan` is the integer mirror stored next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Subscription {
    Basic,
    Silver,
    Premium,
    Enterprise,
}

impl Subscription {
    pub fn plan(self) -> i32 {
        match self {
            Subscription::Basic => 0,
            Subscription::Silver => 1,
            Subscription::Premium => 2,
            Subscription::Enterprise => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Company,
    Employee,
    Admin,
}

impl UserType {
    pub fn is_company(self) -> bool {
        matches!(self, UserType::Company)
    }
}

pub fn parse_subscription(value: &str) -> Option<Subscription> {
    Subscription::from_str(value).ok()
}

pub fn parse_user_type(value: &str) -> Option<UserType> {
    UserType::from_str(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@company.com".into(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".into(),
            user_type: "employee".into(),
            company_id: None,
            subscription: "Basic".into(),
            plan: 0,
            lang: "en".into(),
            avatar: "".into(),
            is_active: true,
            is_login_enable: true,
            dark_mode: false,
            messenger_color: "#2180f3".into(),
            is_disable: true,
            created_by: 0,
            last_login: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_plan_mapping() {
        assert_eq!(Subscription::Basic.plan(), 0);
        assert_eq!(Subscription::Silver.plan(), 1);
        assert_eq!(Subscription::Premium.plan(), 2);
        assert_eq!(Subscription::Enterprise.plan(), 3);
    }

    #[test]
    fn test_parse_subscription() {
        assert_eq!(parse_subscription("Silver"), Some(Subscription::Silver));
        assert_eq!(parse_subscription("Enterprise"), Some(Subscription::Enterprise));
        assert_eq!(parse_subscription("Gold"), None);
        // tier names are case-sensitive
        assert_eq!(parse_subscription("silver"), None);
    }

    #[test]
    fn test_parse_user_type() {
        assert_eq!(parse_user_type("company"), Some(UserType::Company));
        assert_eq!(parse_user_type("employee"), Some(UserType::Employee));
        assert_eq!(parse_user_type("admin"), Some(UserType::Admin));
        assert_eq!(parse_user_type("manager"), None);
    }

    #[test]
    fn test_user_type_display_is_lowercase() {
        assert_eq!(UserType::Company.to_string(), "company");
    }

    #[test]
    fn test_password_never_serialized() {
        let value = serde_json::to_value(sample_user()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("password"));
        assert_eq!(obj["type"], "employee");
        assert_eq!(obj["email"], "john.doe@company.com");
    }
}
