//! Application services - business rules over the ports.

mod post;

pub use post::PostService;
