// SPDX-License-Identifier: MIT

//! Leaderboard view: competitive rankings.
//!
//! Rank is derived from response order alone. The top three rows get
//! medal glyphs and highlight classes; everything below renders the
//! plain numeral.

use super::table::{self, Row, Table};
use super::{ViewMeta, ViewSpec};
use crate::models::LeaderboardEntry;

pub static VIEW: ViewSpec<LeaderboardEntry> = ViewSpec {
    resource: "/api/leaderboard/",
    meta: ViewMeta {
        title: "Leaderboard",
        icon: "bi-trophy",
        subtitle: "Top performers and competitive rankings",
        loading_label: "leaderboard",
        empty_message: "No leaderboard data available. Start competing today!",
    },
    build,
};

fn build(records: &[LeaderboardEntry]) -> Table {
    Table {
        headers: &["Rank", "User", "Team", "Total Calories", "Activities Completed"],
        rows: records
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let rank = i + 1;
                let mut cells = table::rank_cell(rank);
                cells += &table::strong_cell(
                    Some("bi-person-badge"),
                    table::text_or(entry.user_name.as_deref(), "Unknown User"),
                );
                cells += &table::badge_cell(
                    "bg-info",
                    table::text_or(entry.team.as_deref(), "No Team"),
                );
                cells += &table::badge_cell(
                    "bg-primary",
                    &format!("{} cal", entry.total_calories.unwrap_or(0)),
                );
                cells += &table::badge_cell(
                    "bg-success",
                    &entry.total_activities.unwrap_or(0).to_string(),
                );
                Row {
                    class: table::rank_row_class(rank),
                    cells,
                }
            })
            .collect(),
    }
}
