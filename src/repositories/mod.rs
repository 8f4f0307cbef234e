mod csv_file_repository;
mod traits;

pub use csv_file_repository::CsvFileRepository;
pub use traits::ContactRepository;
