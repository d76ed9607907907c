pub mod scroll;
pub mod scrub;
pub mod viewport;
