pub mod repository;

pub use repository::PostgresResourceRepository;
