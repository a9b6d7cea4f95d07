pub mod models;
pub mod repo;

mod error;
pub use error::{StoreError, ValidationError};

mod memory;
pub use memory::MemoryStore;

pub use models::{NewTweet, NewUser, Tweet, TweetId, User, UserId};
pub use repo::Store;
