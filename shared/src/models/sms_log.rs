//! SMS conversation log models

use serde::{Deserialize, Serialize};

/// An SMS exchanged with a farmer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SmsLog {
    pub id: String,
    #[serde(default)]
    pub farmer_id: Option<String>,
    /// Nullable upstream; `None` renders as an unlabelled bubble
    #[serde(default)]
    pub direction: Option<SmsDirection>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Direction of an SMS relative to the platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SmsDirection {
    Inbound,
    Outbound,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for SmsDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmsDirection::Inbound => write!(f, "inbound"),
            SmsDirection::Outbound => write!(f, "outbound"),
            SmsDirection::Unknown => write!(f, "unknown"),
        }
    }
}

/// `GET /api/admin/sms-logs/{farmer_id}`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SmsLogsEnvelope {
    #[serde(default)]
    pub logs: Vec<SmsLog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_columns_deserialize() {
        let log: SmsLog = serde_json::from_str(
            r#"{"id": "s-1", "farmer_id": "f-1", "direction": null, "phone_number": null, "message": null, "status": null}"#,
        )
        .unwrap();
        assert_eq!(log.direction, None);
        assert_eq!(log.phone_number, None);
        assert_eq!(log.message, None);
    }

    #[test]
    fn test_unexpected_direction_is_unknown() {
        let log: SmsLog =
            serde_json::from_str(r#"{"id": "s-2", "direction": "received", "message": "hi"}"#)
                .unwrap();
        assert_eq!(log.direction, Some(SmsDirection::Unknown));
        assert_eq!(log.message.as_deref(), Some("hi"));
    }

    #[test]
    fn test_one_null_row_keeps_the_envelope() {
        let envelope: SmsLogsEnvelope = serde_json::from_str(
            r#"{"logs": [
                {"id": "s-1", "direction": "inbound", "phone_number": "0711000111", "message": "PIN 1234"},
                {"id": "s-2", "direction": "outbound", "phone_number": null, "message": null}
            ]}"#,
        )
        .unwrap();
        assert_eq!(envelope.logs.len(), 2);
        assert_eq!(envelope.logs[0].direction, Some(SmsDirection::Inbound));
    }
}
