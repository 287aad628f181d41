// SPDX-License-Identifier: MIT

//! Dashboard page handlers.
//!
//! Five list pages share one pipeline: activate a controller against the
//! view's resource path, project the resulting state onto the list
//! template, render. Views are independent; nothing is cached between
//! requests.

use crate::error::Result;
use crate::views::{self, ListController, ListPage, ViewSpec};
use crate::AppState;
use askama::Template;
use axum::{extract::State, response::Html, routing::get, Router};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Page routes: the welcome view plus the five list views.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/users", get(users))
        .route("/activities", get(activities))
        .route("/teams", get(teams))
        .route("/leaderboard", get(leaderboard))
        .route("/workouts", get(workouts))
}

async fn home() -> Result<Html<String>> {
    Ok(Html(views::HomePage.render()?))
}

async fn users(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    render_list(&state, &views::users::VIEW).await
}

async fn activities(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    render_list(&state, &views::activities::VIEW).await
}

async fn teams(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    render_list(&state, &views::teams::VIEW).await
}

async fn leaderboard(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    render_list(&state, &views::leaderboard::VIEW).await
}

async fn workouts(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    render_list(&state, &views::workouts::VIEW).await
}

/// Shared fetch -> controller -> render pipeline for the list views.
///
/// A failed fetch is not a server error: the page still renders with the
/// inline alert, so this only errs on template failures.
async fn render_list<T: DeserializeOwned>(
    state: &AppState,
    view: &'static ViewSpec<T>,
) -> Result<Html<String>> {
    let mut controller = ListController::new();
    controller.activate(&state.api, view.resource).await;
    let page = ListPage::from_state(view, controller.into_state());
    Ok(Html(page.render()?))
}
