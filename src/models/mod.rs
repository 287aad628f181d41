// SPDX-License-Identifier: MIT

//! Read-only projections of the backend list resources.
//!
//! Every field is defaulted or optional: a partially-shaped record must
//! never fail the decode of the whole list.

pub mod activity;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;

pub use activity::Activity;
pub use leaderboard::LeaderboardEntry;
pub use team::Team;
pub use user::User;
pub use workout::Workout;
