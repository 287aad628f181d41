// SPDX-License-Identifier: MIT

//! Leaderboard entry record.
//!
//! Rank is positional: the backend returns entries already ordered, and
//! the displayed rank is the 1-based index into that ordering. Any rank
//! field stored on the record is ignored.

use serde::Deserialize;

/// One leaderboard row, as returned by `/api/leaderboard/`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default, alias = "_id")]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub total_calories: Option<i64>,
    #[serde(default)]
    pub total_activities: Option<i64>,
}
