use chrono::Utc;
use uuid::Uuid;

const SUFFIX_LEN: usize = 6;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Company ids look like `CMP-<epoch-millis><6 base36 chars>`. Collisions
/// are practically negligible, not formally bounded.
pub fn generate_company_id() -> String {
    format!("CMP-{}{}", Utc::now().timestamp_millis(), random_suffix())
}

fn random_suffix() -> String {
    let mut n = Uuid::new_v4().as_u128();
    let mut out = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        out.push(BASE36[(n % 36) as usize] as char);
        n /= 36;
    }
    out
}
