pub mod id_generator;
pub mod repository;

pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use repository::Repository;
