//! Repository implementations using SeaORM

pub mod item_repository;
pub mod tags;

pub use item_repository::SeaOrmItemRepository;
