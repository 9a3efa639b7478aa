//! The two faces of the scoreboard: the public leaderboard and the admin
//! panel that feeds it.

pub mod admin;
pub mod public;
