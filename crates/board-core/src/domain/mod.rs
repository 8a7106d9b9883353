//! Domain entities and their output projections.

mod post;
mod view;

pub use post::{NewPost, Post, PostChanges, PostId};
pub use view::{PostDetail, PostSummary};
