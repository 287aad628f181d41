// SPDX-License-Identifier: MIT

//! Suggested workout record.

use serde::Deserialize;

/// A workout suggestion, as returned by `/api/workouts/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Workout {
    #[serde(default, alias = "_id")]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Duration in minutes
    #[serde(default)]
    pub duration: i64,
    /// Free-form difficulty label, matched case-insensitively against a
    /// fixed badge palette
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub category: String,
}
