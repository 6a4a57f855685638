pub mod auth;
pub mod comments;
pub mod leaderboard;
pub mod likes;
pub mod posts;
