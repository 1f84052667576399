pub mod battle;
pub mod categories;
pub mod category;
pub mod daily_challenge;
pub mod home;
pub mod leaderboard;
pub mod not_found;
pub mod quiz_details;
pub mod support;
