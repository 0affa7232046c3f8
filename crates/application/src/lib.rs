//! Application layer - services over the domain repositories
//!
//! Services call the repositories, translate every `StorageError` into an
//! `AppError` with a fixed message, and compose cross-resource reports.

pub mod energy;
pub mod fuel;
pub mod oil;
pub mod record_service;
pub mod report;
pub mod roadtrip;
pub mod services;
pub mod student;

pub use energy::EnergyService;
pub use fuel::FuelService;
pub use oil::OilService;
pub use record_service::RecordService;
pub use report::ReportService;
pub use roadtrip::RoadtripService;
pub use services::Services;
pub use student::StudentService;
