use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Storage key for a lead notification:
/// `{client_name}/{year}/{month}/{day}/{leadgen_id}.json`.
///
/// The date is the UTC date at processing time, not anything carried by the
/// event. An absent leadgen id renders the filename as `None.json`, matching
/// what this service has always written.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadObjectKey {
    client_name: String,
    date: NaiveDate,
    leadgen_id: Option<String>,
}

impl LeadObjectKey {
    pub fn new(
        page_id: Option<&str>,
        leadgen_id: Option<&str>,
        processed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            client_name: client_name_for_page(page_id),
            date: processed_at.date_naive(),
            leadgen_id: leadgen_id.map(str::to_owned),
        }
    }
}

impl fmt::Display for LeadObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{:04}/{:02}/{:02}/{}.json",
            self.client_name,
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.leadgen_id.as_deref().unwrap_or("None"),
        )
    }
}

/// Maps a page id to the client folder name. One known page maps to a
/// readable name; every other page falls back to `client_{page_id}`.
pub fn client_name_for_page(page_id: Option<&str>) -> String {
    match page_id {
        Some("444444444444") => "Test".to_owned(),
        Some(page_id) => format!("client_{page_id}"),
        None => "client_None".to_owned(),
    }
}
