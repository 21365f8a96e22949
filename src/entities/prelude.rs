pub use super::reviews::Entity as Reviews;
