// SPDX-License-Identifier: MIT

//! The list-view pipeline shared by all five dashboard pages.
//!
//! Each page is the same fixed composition: a resource path, a fetch
//! lifecycle (`ListController`), and a column spec turning records into a
//! `Table`. The pieces are bound together by a `ViewSpec` so the pattern
//! exists once instead of five times.

pub mod activities;
pub mod leaderboard;
pub mod table;
pub mod teams;
pub mod users;
pub mod workouts;

use crate::error::FetchError;
use crate::services::ApiClient;
use askama::Template;
use serde::de::DeserializeOwned;
use table::Table;

/// Lifecycle of one mounted list view.
///
/// `Loaded` and `Failed` are terminal; there is no transition back to
/// `Loading` without a fresh mount (the dashboard has no refresh
/// affordance).
#[derive(Debug)]
pub enum ListState<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(FetchError),
}

/// Drives one resource's fetch lifecycle:
/// `Idle -> Loading -> Loaded | Failed`.
pub struct ListController<T> {
    state: ListState<T>,
}

impl<T: DeserializeOwned> ListController<T> {
    pub fn new() -> Self {
        Self {
            state: ListState::Idle,
        }
    }

    /// Run the single fetch for this mount.
    ///
    /// Invokes the client exactly once; activating an already-activated
    /// controller is a no-op, so at most one fetch is ever in flight per
    /// instance.
    pub async fn activate(&mut self, api: &ApiClient, resource: &str) -> &ListState<T> {
        if matches!(self.state, ListState::Idle) {
            self.state = ListState::Loading;
            self.state = match api.fetch_list(resource).await {
                Ok(records) => ListState::Loaded(records),
                Err(err) => ListState::Failed(err),
            };
        }
        &self.state
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn into_state(self) -> ListState<T> {
        self.state
    }
}

impl<T: DeserializeOwned> Default for ListController<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Static page chrome for one list view.
pub struct ViewMeta {
    pub title: &'static str,
    /// bootstrap-icons class for the page heading
    pub icon: &'static str,
    pub subtitle: &'static str,
    /// Lowercase noun for the loading placeholder ("Loading users...")
    pub loading_label: &'static str,
    pub empty_message: &'static str,
}

/// Fixed composition binding a resource path to its column spec.
pub struct ViewSpec<T> {
    /// Backend path including the trailing slash, e.g. `/api/users/`
    pub resource: &'static str,
    pub meta: ViewMeta,
    pub build: fn(&[T]) -> Table,
}

/// Rendered list page. One template serves all five views; the branch
/// between spinner, error alert, empty alert and table happens here.
#[derive(Template)]
#[template(path = "list.html")]
pub struct ListPage {
    pub meta: &'static ViewMeta,
    pub loading: bool,
    /// Error message shown verbatim in the alert; empty means no error
    pub error: String,
    pub table: Table,
}

impl ListPage {
    /// Project a controller state onto the page model.
    pub fn from_state<T>(view: &'static ViewSpec<T>, state: ListState<T>) -> Self {
        let (loading, error, table) = match state {
            ListState::Idle | ListState::Loading => (true, String::new(), Table::empty()),
            ListState::Loaded(records) => (false, String::new(), (view.build)(&records)),
            ListState::Failed(err) => (false, err.to_string(), Table::empty()),
        };
        Self {
            meta: &view.meta,
            loading,
            error,
            table,
        }
    }
}

/// Static welcome page.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    static TEST_VIEW: ViewSpec<User> = ViewSpec {
        resource: "/api/users/",
        meta: ViewMeta {
            title: "Users",
            icon: "bi-people",
            subtitle: "Community members and their profiles",
            loading_label: "users",
            empty_message: "No users found.",
        },
        build: |records| Table {
            headers: &["#", "Name"],
            rows: records
                .iter()
                .enumerate()
                .map(|(i, u)| table::Row::plain(table::index_cell(i) + &table::text_cell(&u.name)))
                .collect(),
        },
    };

    #[test]
    fn test_page_from_loaded_state() {
        let records = vec![User {
            id: None,
            name: "Wonder Woman".to_string(),
            email: "diana.prince@dc.com".to_string(),
            team: Some("Team DC".to_string()),
        }];
        let page = ListPage::from_state(&TEST_VIEW, ListState::Loaded(records));
        assert!(!page.loading);
        assert!(page.error.is_empty());
        assert_eq!(page.table.rows.len(), 1);
        assert!(page.table.rows[0].cells.contains("Wonder Woman"));
    }

    #[test]
    fn test_page_from_failed_state() {
        let page = ListPage::from_state(
            &TEST_VIEW,
            ListState::Failed(crate::error::FetchError::Http(404)),
        );
        assert!(!page.loading);
        assert_eq!(page.error, "HTTP error! status: 404");
        assert!(page.table.rows.is_empty());
    }

    #[test]
    fn test_page_from_pending_states() {
        let page = ListPage::from_state(&TEST_VIEW, ListState::<User>::Loading);
        assert!(page.loading);
        let page = ListPage::from_state(&TEST_VIEW, ListState::<User>::Idle);
        assert!(page.loading);
    }

    #[test]
    fn test_loaded_empty_keeps_view_headers_out() {
        let page = ListPage::from_state(&TEST_VIEW, ListState::Loaded(Vec::new()));
        assert!(page.table.rows.is_empty());
        let html = page.render().unwrap();
        assert!(html.contains("No users found."));
        assert!(!html.contains("<table"));
    }
}
