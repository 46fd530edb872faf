pub mod data_loader; // Strategy trait
pub mod csv_data_loader; // CSV implementation of strategy
pub mod json_data_loader; // JSON implementation of strategy
pub mod factory; // Factory for loaders
pub mod schema; // Required columns + validated dataset

pub use data_loader::{CellValue, DataLoader, LoadedData, Row};
pub use csv_data_loader::CsvDataLoader;
pub use json_data_loader::JsonDataLoader;
pub use factory::{DataFormat, DataLoaderFactory};
pub use schema::{validate, Dataset, REQUIRED_COLUMNS, NUMERIC_COLUMNS};
