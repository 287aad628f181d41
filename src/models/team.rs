// SPDX-License-Identifier: MIT

//! Team record.

use serde::Deserialize;

/// A team, as returned by `/api/teams/`.
///
/// Only the member count is displayed, so members stay untyped.
#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    #[serde(default, alias = "_id")]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub total_points: Option<i64>,
}

impl Team {
    /// Number of members; a missing list counts as zero.
    pub fn member_count(&self) -> usize {
        self.members.as_ref().map_or(0, |m| m.len())
    }
}
