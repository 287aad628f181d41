// SPDX-License-Identifier: MIT

//! Teams view: team rosters and point totals.

use super::table::{self, Row, Table};
use super::{ViewMeta, ViewSpec};
use crate::models::Team;

pub static VIEW: ViewSpec<Team> = ViewSpec {
    resource: "/api/teams/",
    meta: ViewMeta {
        title: "Teams",
        icon: "bi-people-fill",
        subtitle: "Join a team and compete together",
        loading_label: "teams",
        empty_message: "No teams found. Create the first team!",
    },
    build,
};

fn build(records: &[Team]) -> Table {
    Table {
        headers: &["#", "Team Name", "Members", "Total Points"],
        rows: records
            .iter()
            .enumerate()
            .map(|(i, team)| {
                let mut cells = table::index_cell(i);
                cells += &table::strong_cell(Some("bi-shield-check"), &team.name);
                cells += &table::badge_cell(
                    "bg-info",
                    &format!("{} members", team.member_count()),
                );
                cells += &table::badge_cell(
                    "bg-success",
                    &format!("{} pts", team.total_points.unwrap_or(0)),
                );
                Row::plain(cells)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_member_counts() {
        let teams = vec![
            Team {
                id: None,
                name: "Team Marvel".to_string(),
                members: Some(vec![json!("a"), json!("b"), json!("c")]),
                total_points: Some(120),
            },
            Team {
                id: None,
                name: "Team DC".to_string(),
                members: None,
                total_points: None,
            },
        ];
        let t = build(&teams);
        assert!(t.rows[0].cells.contains("3 members"));
        assert!(t.rows[0].cells.contains("120 pts"));
        assert!(t.rows[1].cells.contains("0 members"));
        assert!(t.rows[1].cells.contains("0 pts"));
    }
}
