use serde::Serialize;
use time::OffsetDateTime;
use tokio::time::Instant;
use uuid::Uuid;

/// A posted message, in the shape handed out to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub username: String,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Message {
    pub(crate) fn new(username: String, text: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            username,
            text,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

/// A message as held by the board, with the instant it stops being visible.
#[derive(Debug)]
pub(crate) struct Entry {
    message: Message,
    expires_at: Instant,
}

impl Entry {
    pub(crate) fn new(message: Message, expires_at: Instant) -> Self {
        Self { message, expires_at }
    }

    pub(crate) fn message(&self) -> &Message {
        &self.message
    }

    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use time::format_description::well_known::Rfc3339;

    use super::*;

    #[test]
    fn serializes_without_expiry() {
        let message = Message::new("alice".to_owned(), "hi".to_owned());
        let json = serde_json::to_value(&message).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, ["createdAt", "id", "text", "username"]);
        assert_eq!(obj["username"], "alice");
        assert_eq!(obj["text"], "hi");
    }

    #[test]
    fn created_at_is_rfc3339() {
        let message = Message::new("alice".to_owned(), "hi".to_owned());
        let json = serde_json::to_value(&message).unwrap();
        let created_at = json["createdAt"].as_str().unwrap();

        let parsed = OffsetDateTime::parse(created_at, &Rfc3339).unwrap();
        assert_eq!(parsed.unix_timestamp(), message.created_at.unix_timestamp());
    }

    #[test]
    fn ids_are_distinct() {
        let a = Message::new("a".to_owned(), "x".to_owned());
        let b = Message::new("a".to_owned(), "x".to_owned());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn expiry_is_inclusive() {
        let now = Instant::now();
        let entry = Entry::new(
            Message::new("a".to_owned(), "x".to_owned()),
            now + Duration::from_secs(1),
        );

        assert!(!entry.is_expired(now));
        assert!(entry.is_expired(now + Duration::from_secs(1)));
        assert!(entry.is_expired(now + Duration::from_secs(2)));
    }
}
