//! Infrastructure layer - persistence and settings

pub mod config;
pub mod database;
pub mod repositories;

pub use config::Settings;
pub use database::{
    SeaOrmEnergyRepository, SeaOrmFuelRepository, SeaOrmOilRepository, SeaOrmRoadtripRepository,
    SeaOrmStudentRepository,
};
pub use repositories::{InMemoryRepository, InMemoryStudentRepository, Repositories};
