use serde_json::Value;
use sqlx::MySqlPool;

use crate::errors::AppError;
use crate::model::user::parse_subscription;

/// Columns a profile update may touch. Keys outside this list (password,
/// is_active, plan, created_by, anything unknown) are ignored and never
/// reach the SQL text.
pub const MUTABLE_FIELDS: &[&str] = &[
    "first_name",
    "last_name",
    "subscription",
    "lang",
    "avatar",
    "dark_mode",
    "messenger_color",
];

/// ===============================
/// SQL bindable value enum
/// ===============================
#[derive(Debug, PartialEq)]
pub enum SqlValue {
    String(String),
    I64(i64),
    U64(u64),
    Bool(bool),
}

/// ===============================
/// SQL update container
/// ===============================
#[derive(Debug)]
pub struct SqlUpdate {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

/// ===============================
/// Build the partial profile UPDATE
/// ===============================
///
/// Column names come only from `MUTABLE_FIELDS`; caller keys select columns
/// but are never interpolated. Setting `subscription` also binds the
/// matching `plan`, and `updated_at` is bumped on every update.
pub fn build_profile_update(user_id: u64, payload: &Value) -> Result<SqlUpdate, AppError> {
    let obj = payload
        .as_object()
        .ok_or_else(|| AppError::BadRequest("Payload must be a JSON object".to_string()))?;

    let mut assignments: Vec<String> = Vec::new();
    let mut values: Vec<SqlValue> = Vec::new();

    for &column in MUTABLE_FIELDS {
        let Some(value) = obj.get(column) else {
            continue;
        };

        match column {
            "dark_mode" => match value {
                Value::Bool(b) => {
                    assignments.push("dark_mode = ?".to_string());
                    values.push(SqlValue::Bool(*b));
                }
                _ => {
                    return Err(AppError::BadRequest(
                        "Unsupported JSON value type".to_string(),
                    ));
                }
            },
            "subscription" => match value {
                Value::String(s) => {
                    let tier = parse_subscription(s).ok_or_else(|| {
                        AppError::BadRequest("Invalid subscription".to_string())
                    })?;
                    assignments.push("subscription = ?".to_string());
                    values.push(SqlValue::String(s.clone()));
                    // plan must stay consistent with subscription
                    assignments.push("plan = ?".to_string());
                    values.push(SqlValue::I64(tier.plan() as i64));
                }
                _ => {
                    return Err(AppError::BadRequest(
                        "Unsupported JSON value type".to_string(),
                    ));
                }
            },
            _ => match value {
                Value::String(s) => {
                    assignments.push(format!("{} = ?", column));
                    values.push(SqlValue::String(s.clone()));
                }
                _ => {
                    return Err(AppError::BadRequest(
                        "Unsupported JSON value type".to_string(),
                    ));
                }
            },
        }
    }

    if assignments.is_empty() {
        return Err(AppError::BadRequest(
            "No fields provided for update".to_string(),
        ));
    }

    assignments.push("updated_at = NOW()".to_string());

    let sql = format!("UPDATE users SET {} WHERE id = ?", assignments.join(", "));

    values.push(SqlValue::U64(user_id));

    Ok(SqlUpdate { sql, values })
}

/// ===============================
/// Execute the update
/// ===============================
pub async fn execute_update(pool: &MySqlPool, update: SqlUpdate) -> Result<u64, sqlx::Error> {
    let mut query = sqlx::query(&update.sql);

    for value in update.values {
        query = match value {
            SqlValue::String(v) => query.bind(v),
            SqlValue::I64(v) => query.bind(v),
            SqlValue::U64(v) => query.bind(v),
            SqlValue::Bool(v) => query.bind(v),
        };
    }

    let result = query.execute(pool).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_field() {
        let update = build_profile_update(7, &json!({"first_name": "New"})).unwrap();
        assert_eq!(
            update.sql,
            "UPDATE users SET first_name = ?, updated_at = NOW() WHERE id = ?"
        );
        assert_eq!(
            update.values,
            vec![SqlValue::String("New".into()), SqlValue::U64(7)]
        );
    }

    #[test]
    fn test_subscription_also_sets_plan() {
        let update = build_profile_update(1, &json!({"subscription": "Silver"})).unwrap();
        assert!(update.sql.contains("subscription = ?"));
        assert!(update.sql.contains("plan = ?"));
        assert!(update.values.contains(&SqlValue::I64(1)));

        let update = build_profile_update(1, &json!({"subscription": "Enterprise"})).unwrap();
        assert!(update.values.contains(&SqlValue::I64(3)));
    }

    #[test]
    fn test_fields_follow_allow_list_order() {
        let update = build_profile_update(
            1,
            &json!({"messenger_color": "#ff0000", "first_name": "A", "lang": "fr"}),
        )
        .unwrap();
        assert_eq!(
            update.sql,
            "UPDATE users SET first_name = ?, lang = ?, messenger_color = ?, updated_at = NOW() WHERE id = ?"
        );
    }

    #[test]
    fn test_dark_mode_is_bool() {
        let update = build_profile_update(1, &json!({"dark_mode": true})).unwrap();
        assert!(update.values.contains(&SqlValue::Bool(true)));

        assert!(build_profile_update(1, &json!({"dark_mode": "yes"})).is_err());
    }

    #[test]
    fn test_empty_body_rejected() {
        assert!(build_profile_update(1, &json!({})).is_err());
    }

    #[test]
    fn test_unknown_and_protected_keys_ignored() {
        // only ignored keys present: same as an empty update
        let result = build_profile_update(
            1,
            &json!({
                "password": "sneaky",
                "is_active": false,
                "plan": 3,
                "created_by": 42,
                "email": "new@email.com",
                "id; DROP TABLE users": 1
            }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_ignored_keys_do_not_leak_into_sql() {
        let update = build_profile_update(
            1,
            &json!({"first_name": "A", "is_active": false, "plan": 3}),
        )
        .unwrap();
        assert!(!update.sql.contains("is_active"));
        assert!(!update.sql.contains("plan"));
        assert_eq!(update.values.len(), 2);
    }

    #[test]
    fn test_wrong_type_for_string_column() {
        assert!(build_profile_update(1, &json!({"first_name": 5})).is_err());
        assert!(build_profile_update(1, &json!({"subscription": 1})).is_err());
    }

    #[test]
    fn test_updated_at_always_present() {
        let update = build_profile_update(1, &json!({"lang": "de"})).unwrap();
        assert!(update.sql.contains("updated_at = NOW()"));
    }
}
