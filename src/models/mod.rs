pub mod post;
pub mod vote;
