pub mod posting;

pub use posting::{Posting, ScoredPosting};
