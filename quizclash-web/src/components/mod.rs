pub mod avatar;
pub mod badge;
pub mod battle;
pub mod confetti;
pub mod footer;
pub mod header;
pub mod modal;
pub mod progress;
