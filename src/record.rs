use serde::{Deserialize, Serialize};

/// What is stored for a single site.
///
/// On disk the hash lives under the `password` key; the plaintext is never written.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub username: String,
    #[serde(rename = "password")]
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stored_under_password_key() {
        let record = Record {
            username: "alice".to_owned(),
            password_hash: "deadbeef".to_owned(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"username": "alice", "password": "deadbeef"})
        );
    }
}
