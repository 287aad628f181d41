// SPDX-License-Identifier: MIT

//! Users view: community members and their profiles.

use super::table::{self, Row, Table};
use super::{ViewMeta, ViewSpec};
use crate::models::User;

pub static VIEW: ViewSpec<User> = ViewSpec {
    resource: "/api/users/",
    meta: ViewMeta {
        title: "Users",
        icon: "bi-people",
        subtitle: "Community members and their profiles",
        loading_label: "users",
        empty_message: "No users found.",
    },
    build,
};

fn build(records: &[User]) -> Table {
    Table {
        headers: &["#", "Name", "Email", "Team", "Status"],
        rows: records
            .iter()
            .enumerate()
            .map(|(i, user)| {
                let mut cells = table::index_cell(i);
                cells += &table::strong_cell(Some("bi-person-circle"), &user.name);
                cells += &table::text_cell(&user.email);
                cells += &table::badge_cell(
                    "bg-info",
                    table::text_or(user.team.as_deref(), "No Team"),
                );
                // Status is not sourced from the record; everyone shows Active
                cells += &table::badge_cell("bg-success", "Active");
                Row::plain(cells)
            })
            .collect(),
    }
}
