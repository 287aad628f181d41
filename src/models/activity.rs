// SPDX-License-Identifier: MIT

//! Logged fitness activity record.

use serde::Deserialize;

/// A single tracked activity, as returned by `/api/activities/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    #[serde(default, alias = "_id")]
    pub id: Option<serde_json::Value>,
    /// Email of the user who logged the activity
    #[serde(default)]
    pub user_email: String,
    /// Sport type (Running, Cycling, Swimming, ...)
    #[serde(default)]
    pub activity_type: String,
    /// Duration in minutes
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub calories: i64,
    /// Start timestamp (ISO 8601); rendered as a calendar date or "N/A"
    #[serde(default)]
    pub date: Option<String>,
}
