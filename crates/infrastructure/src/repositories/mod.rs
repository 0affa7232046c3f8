mod in_memory;
mod in_memory_students;
mod memory_reports;

use std::sync::Arc;

use domain::{
    Energy, EnergyRepository, Fuel, FuelRepository, Oil, OilRepository, Roadtrip,
    RoadtripRepository, StudentRepository,
};
use sea_orm::DatabaseConnection;

use crate::database::{
    SeaOrmEnergyRepository, SeaOrmFuelRepository, SeaOrmOilRepository, SeaOrmRoadtripRepository,
    SeaOrmStudentRepository,
};

pub use in_memory::InMemoryRepository;
pub use in_memory_students::InMemoryStudentRepository;

/// One repository per resource kind, behind the domain traits
#[derive(Clone)]
pub struct Repositories {
    pub energy: Arc<dyn EnergyRepository>,
    pub fuel: Arc<dyn FuelRepository>,
    pub oil: Arc<dyn OilRepository>,
    pub roadtrip: Arc<dyn RoadtripRepository>,
    pub students: Arc<dyn StudentRepository>,
}

impl Repositories {
    /// Postgres-backed repositories sharing one connection pool
    pub fn postgres(db: DatabaseConnection) -> Self {
        Self {
            energy: Arc::new(SeaOrmEnergyRepository::new(db.clone())),
            fuel: Arc::new(SeaOrmFuelRepository::new(db.clone())),
            oil: Arc::new(SeaOrmOilRepository::new(db.clone())),
            roadtrip: Arc::new(SeaOrmRoadtripRepository::new(db.clone())),
            students: Arc::new(SeaOrmStudentRepository::new(db)),
        }
    }

    /// Process-local repositories, empty at start
    pub fn in_memory() -> Self {
        Self {
            energy: Arc::new(InMemoryRepository::<Energy>::new()),
            fuel: Arc::new(InMemoryRepository::<Fuel>::new()),
            oil: Arc::new(InMemoryRepository::<Oil>::new()),
            roadtrip: Arc::new(InMemoryRepository::<Roadtrip>::new()),
            students: Arc::new(InMemoryStudentRepository::new()),
        }
    }
}
