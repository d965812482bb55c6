pub mod object_key;

use common::deserializers::string_or_number::from_string_or_number;
use serde::{self, Deserialize, Serialize};
use serde_json::{Map, Value};

/// Webhook payload describing one or more lead-generation events.
///
/// Only the fields this service consumes are typed. Everything else the
/// platform sends travels in the flattened passthrough maps, so the stored
/// document and the forwarded `changes` reproduce the notification as it
/// was received.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct LeadNotification {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<LeadEntry>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct LeadEntry {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<LeadChange>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct LeadChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<LeadChangeValue>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct LeadChangeValue {
    /// Identifier of the page that generated the lead. The platform has
    /// shipped this both as a JSON string and as a number.
    #[serde(
        default,
        deserialize_with = "from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_id: Option<String>,

    /// Identifier of the lead submission itself.
    #[serde(
        default,
        deserialize_with = "from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub leadgen_id: Option<String>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// First-entry, first-change view of a notification. The platform batches
/// entries and changes; this service consumes only the first of each.
#[derive(Debug)]
pub struct ExtractedLead<'a> {
    pub page_id: Option<&'a str>,
    pub leadgen_id: Option<&'a str>,
    pub changes: &'a [LeadChange],
}

#[derive(Debug, thiserror::Error)]
pub enum LeadStructureError {
    #[error("notification has an empty entry list")]
    EmptyEntries,
}

impl LeadNotification {
    /// Returns the lead identifiers and the `changes` sequence of the first
    /// entry. An empty entry list is a structural error; a first entry
    /// without changes yields absent identifiers and an empty sequence.
    pub fn extract_lead(&self) -> Result<ExtractedLead<'_>, LeadStructureError> {
        let entry = self.entry.first().ok_or(LeadStructureError::EmptyEntries)?;
        let value = entry.changes.first().and_then(|change| change.value.as_ref());

        Ok(ExtractedLead {
            page_id: value.and_then(|value| value.page_id.as_deref()),
            leadgen_id: value.and_then(|value| value.leadgen_id.as_deref()),
            changes: &entry.changes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::test_tools::http::constants::{
        LEADGEN_ID_FOR_MOCK_REQUESTS, PAGE_ID_FOR_MOCK_REQUESTS,
    };
    use serde_json::json;

    fn lead_notification_json() -> Value {
        json!({
            "object": "page",
            "entry": [
                {
                    "id": PAGE_ID_FOR_MOCK_REQUESTS,
                    "time": 1709640000,
                    "changes": [
                        {
                            "field": "leadgen",
                            "value": {
                                "page_id": PAGE_ID_FOR_MOCK_REQUESTS,
                                "leadgen_id": LEADGEN_ID_FOR_MOCK_REQUESTS,
                                "form_id": "111222333444555",
                                "created_time": 1709640000,
                                "ad_id": "120211234567890123"
                            }
                        }
                    ]
                }
            ]
        })
    }

    #[test]
    fn extracts_first_entry_first_change() {
        let notification: LeadNotification =
            serde_json::from_value(lead_notification_json()).unwrap();

        let lead = notification.extract_lead().unwrap();
        assert_eq!(Some(PAGE_ID_FOR_MOCK_REQUESTS), lead.page_id);
        assert_eq!(Some(LEADGEN_ID_FOR_MOCK_REQUESTS), lead.leadgen_id);
        assert_eq!(1, lead.changes.len());
    }

    #[test]
    fn extracts_first_entry_when_more_are_present() {
        let mut document = lead_notification_json();
        document["entry"]
            .as_array_mut()
            .unwrap()
            .push(json!({ "id": "999", "changes": [] }));
        let notification: LeadNotification = serde_json::from_value(document).unwrap();

        let lead = notification.extract_lead().unwrap();
        assert_eq!(Some(PAGE_ID_FOR_MOCK_REQUESTS), lead.page_id);
    }

    #[test]
    fn empty_entry_list_is_a_structural_error() {
        let notification: LeadNotification =
            serde_json::from_value(json!({ "object": "page", "entry": [] })).unwrap();

        let error = notification.extract_lead().unwrap_err();
        assert!(matches!(error, LeadStructureError::EmptyEntries));
    }

    #[test]
    fn missing_entry_key_is_a_structural_error() {
        let notification: LeadNotification =
            serde_json::from_value(json!({ "object": "page" })).unwrap();

        assert!(notification.extract_lead().is_err());
    }

    #[test]
    fn entry_without_changes_yields_absent_identifiers() {
        let notification: LeadNotification = serde_json::from_value(json!({
            "object": "page",
            "entry": [{ "id": "1", "time": 1709640000 }]
        }))
        .unwrap();

        let lead = notification.extract_lead().unwrap();
        assert_eq!(None, lead.page_id);
        assert_eq!(None, lead.leadgen_id);
        assert!(lead.changes.is_empty());
    }

    #[test]
    fn change_without_value_yields_absent_identifiers() {
        let notification: LeadNotification = serde_json::from_value(json!({
            "entry": [{ "changes": [{ "field": "leadgen" }] }]
        }))
        .unwrap();

        let lead = notification.extract_lead().unwrap();
        assert_eq!(None, lead.page_id);
        assert_eq!(None, lead.leadgen_id);
        assert_eq!(1, lead.changes.len());
    }

    #[test]
    fn numeric_identifiers_are_accepted() {
        let notification: LeadNotification = serde_json::from_value(json!({
            "entry": [{ "changes": [{ "value": { "page_id": 444444444444u64, "leadgen_id": 987654321098765u64 } }] }]
        }))
        .unwrap();

        let lead = notification.extract_lead().unwrap();
        assert_eq!(Some(PAGE_ID_FOR_MOCK_REQUESTS), lead.page_id);
        assert_eq!(Some(LEADGEN_ID_FOR_MOCK_REQUESTS), lead.leadgen_id);
    }

    #[test]
    fn reserialized_notification_is_deep_equal_to_the_original() {
        let document = lead_notification_json();
        let notification: LeadNotification = serde_json::from_value(document.clone()).unwrap();

        assert_eq!(document, serde_json::to_value(&notification).unwrap());
    }

    #[test]
    fn reserialized_changes_are_deep_equal_to_the_original_sequence() {
        let document = lead_notification_json();
        let notification: LeadNotification = serde_json::from_value(document.clone()).unwrap();

        let lead = notification.extract_lead().unwrap();
        assert_eq!(
            document["entry"][0]["changes"],
            serde_json::to_value(lead.changes).unwrap()
        );
    }
}
