pub mod comment_repo;
pub mod karma_repo;
pub mod like_repo;
pub mod post_repo;
pub mod user_repo;

pub use comment_repo::CommentRepo;
pub use karma_repo::KarmaRepo;
pub use like_repo::{LikeRepo, ToggleError};
pub use post_repo::PostRepo;
pub use user_repo::UserRepo;
