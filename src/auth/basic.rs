use base64::{Engine as _, engine::general_purpose::STANDARD};

#[derive(Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Parses an `Authorization: Basic <base64(email:password)>` header value.
///
/// Returns `None` for anything malformed: wrong scheme, invalid base64,
/// non-UTF-8 payload, missing colon, or an empty email/password. Callers
/// must not distinguish these cases in their responses.
pub fn parse_basic_header(header_value: &str) -> Option<Credentials> {
    let encoded = header_value.strip_prefix("Basic ")?;

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;

    // split once on the first colon; passwords may contain colons
    let (email, password) = decoded.split_once(':')?;

    if email.is_empty() || password.is_empty() {
        return None;
    }

    Some(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}
