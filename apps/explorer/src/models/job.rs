use std::fmt;

use serde::{Deserialize, Serialize};

/// A single job posting as it appears in the cached feed.
///
/// Records are never mutated after loading; queries only read fields and
/// produce derived values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub title: String,
    pub company: String,
    pub city: String,
    pub state: String,
    pub caption: String,
    pub snippet: String,
    pub date_time_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Job {
    /// Fills an empty caption with the feed's standard summary line.
    pub fn with_default_caption(mut self) -> Self {
        if self.caption.trim().is_empty() {
            self.caption = format!(
                "{} is looking for a {} in {}",
                self.company, self.title, self.city
            );
        }
        self
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Job{{title={}, company={}, city={}, state={}}}",
            self.title, self.company, self.city, self.state
        )
    }
}
