pub mod kitten;
pub mod memory;
pub mod user;

pub use kitten::PostgresKittenRepository;
pub use memory::MemoryKittenRepository;
pub use memory::MemoryUserRepository;
pub use user::PostgresUserRepository;
