// SPDX-License-Identifier: MIT

//! OctoFit Dashboard: server-rendered views over the OctoFit REST backend.
//!
//! This crate serves the fitness dashboard pages (users, activities, teams,
//! leaderboard, workouts), each backed by a single list fetch against the
//! backend API.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

use config::Config;
use services::ApiClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
}
