//! Rewards points history client.

use crate::vendi::api::ApiClient;
use crate::vendi::error::Error;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// One ledger line in the points history, newest first.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointsEntry {
    pub id: String,
    pub description: String,
    pub points: i64,
    /// RFC 3339 timestamp, displayed as-is.
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointsHistory {
    pub total_points: i64,
    #[serde(default)]
    pub entries: Vec<PointsEntry>,
}

/// Fetch the points history for the signed-in account.
///
/// # Errors
/// Returns the mapped network, HTTP, or decoding failure.
pub async fn points_history(
    client: &ApiClient,
    session_token: &SecretString,
) -> Result<PointsHistory, Error> {
    client
        .get_json("/v1/rewards/history", Some(session_token))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_decodes_service_payload() {
        let payload = r#"{
            "total_points": 180,
            "entries": [
                {
                    "id": "01J9ZK3V9GQ3",
                    "description": "Order #1042 delivered",
                    "points": 30,
                    "created_at": "2025-11-02T09:14:00Z"
                },
                {
                    "id": "01J9ZK3V9GQ4",
                    "description": "Referral bonus",
                    "points": 150,
                    "created_at": "2025-10-28T17:03:00Z"
                }
            ]
        }"#;

        let history: PointsHistory = serde_json::from_str(payload).expect("json");
        assert_eq!(history.total_points, 180);
        assert_eq!(history.entries.len(), 2);
        assert_eq!(history.entries[0].description, "Order #1042 delivered");
        assert_eq!(history.entries[1].points, 150);
    }

    #[test]
    fn history_tolerates_missing_entries() {
        let history: PointsHistory =
            serde_json::from_str(r#"{"total_points":0}"#).expect("json");
        assert!(history.entries.is_empty());
    }
}
