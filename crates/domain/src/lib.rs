//! Domain layer - entities and rules of the sustainability metrics service
//!
//! This crate contains:
//! - Metric records (energy, fuel, oil, roadtrip) and student records
//! - Closed enumerations shared by the wire and the database
//! - Repository interfaces (traits)
//! - Pure shaping of report aggregates
//!
//! Nothing here performs I/O.

pub mod energy;
pub mod error;
pub mod fuel;
pub mod literal;
pub mod oil;
pub mod patch;
pub mod period;
pub mod record;
pub mod report;
pub mod roadtrip;
pub mod student;

// Re-export commonly used types
pub use energy::{Energy, EnergyCategory, EnergyLocation, EnergyRepository};
pub use error::{AppError, AppErrorKind, InvalidLiteral, StorageError};
pub use fuel::{Fuel, FuelRepository, FuelType};
pub use literal::{EmissionType, Literal};
pub use oil::{Oil, OilCategory, OilRepository, OilType};
pub use patch::FieldPatch;
pub use period::YearWindow;
pub use record::{CrudRepository, Measurement, Record};
pub use roadtrip::{Roadtrip, RoadtripGroup, RoadtripRepository};
pub use student::{Student, StudentRepository};
