// SPDX-License-Identifier: MIT

//! Workouts view: suggested workouts with difficulty badges.

use super::table::{self, Row, Table};
use super::{ViewMeta, ViewSpec};
use crate::models::Workout;

pub static VIEW: ViewSpec<Workout> = ViewSpec {
    resource: "/api/workouts/",
    meta: ViewMeta {
        title: "Workouts",
        icon: "bi-heart-pulse",
        subtitle: "Personalized workout suggestions for your fitness goals",
        loading_label: "workouts",
        empty_message: "No workouts found. Check back soon for new workout suggestions!",
    },
    build,
};

fn build(records: &[Workout]) -> Table {
    Table {
        headers: &[
            "#",
            "Workout Name",
            "Description",
            "Duration (min)",
            "Difficulty",
            "Category",
        ],
        rows: records
            .iter()
            .enumerate()
            .map(|(i, workout)| {
                let mut cells = table::index_cell(i);
                cells += &table::strong_cell(Some("bi-lightning-charge"), &workout.name);
                cells += &table::text_cell(&workout.description);
                cells += &table::badge_cell("bg-primary", &workout.duration.to_string());
                cells += &table::badge_cell(
                    table::difficulty_badge(workout.difficulty.as_deref()),
                    workout.difficulty.as_deref().unwrap_or(""),
                );
                cells += &table::text_cell(&workout.category);
                Row::plain(cells)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout(difficulty: Option<&str>) -> Workout {
        Workout {
            id: None,
            name: "Hero HIIT".to_string(),
            description: "High intensity interval training".to_string(),
            duration: 30,
            difficulty: difficulty.map(str::to_string),
            category: "Cardio".to_string(),
        }
    }

    #[test]
    fn test_difficulty_badges() {
        let t = build(&[
            workout(Some("Advanced")),
            workout(Some("unknown")),
            workout(None),
        ]);
        assert!(t.rows[0].cells.contains("badge bg-danger"));
        assert!(t.rows[0].cells.contains("Advanced"));
        assert!(t.rows[1].cells.contains("badge bg-secondary"));
        assert!(t.rows[2].cells.contains("badge bg-secondary"));
    }
}
