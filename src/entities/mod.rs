pub mod prelude;

pub mod reviews;
