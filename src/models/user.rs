// SPDX-License-Identifier: MIT

//! Community member record.

use serde::Deserialize;

/// A registered user, as returned by `/api/users/`.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Backend identifier (`id`, or Mongo-style `_id`)
    #[serde(default, alias = "_id")]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Team name; users without a team show "No Team"
    #[serde(default)]
    pub team: Option<String>,
}
