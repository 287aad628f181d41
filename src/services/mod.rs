// SPDX-License-Identifier: MIT

//! Services module - the backend API client.

pub mod api;

pub use api::{ApiClient, ListPayload};
