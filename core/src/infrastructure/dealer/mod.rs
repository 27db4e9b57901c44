pub mod repository;

pub use repository::PostgresDealerRepository;
