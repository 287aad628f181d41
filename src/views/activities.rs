// SPDX-License-Identifier: MIT

//! Activities view: logged fitness activities.

use super::table::{self, Row, Table};
use super::{ViewMeta, ViewSpec};
use crate::models::Activity;

pub static VIEW: ViewSpec<Activity> = ViewSpec {
    resource: "/api/activities/",
    meta: ViewMeta {
        title: "Activities",
        icon: "bi-graph-up",
        subtitle: "Track all your fitness activities and progress",
        loading_label: "activities",
        empty_message: "No activities found. Start tracking your fitness journey today!",
    },
    build,
};

fn build(records: &[Activity]) -> Table {
    Table {
        headers: &["#", "User", "Activity Type", "Duration (min)", "Calories", "Date"],
        rows: records
            .iter()
            .enumerate()
            .map(|(i, activity)| {
                let mut cells = table::index_cell(i);
                cells += &table::text_cell(&activity.user_email);
                cells += &table::strong_cell(None, &activity.activity_type);
                cells += &table::badge_cell("bg-primary", &activity.duration.to_string());
                cells += &table::badge_cell("bg-danger", &activity.calories.to_string());
                cells += &table::text_cell(&table::format_date(activity.date.as_deref()));
                Row::plain(cells)
            })
            .collect(),
    }
}
