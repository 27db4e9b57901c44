pub mod repository;

pub use repository::PostgresAttendanceRepository;
