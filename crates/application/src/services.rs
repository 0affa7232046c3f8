use infrastructure::Repositories;

use crate::{
    EnergyService, FuelService, OilService, ReportService, RoadtripService, StudentService,
};

/// Every service, wired to one set of repositories
#[derive(Clone)]
pub struct Services {
    pub energy: EnergyService,
    pub fuel: FuelService,
    pub oil: OilService,
    pub roadtrip: RoadtripService,
    pub students: StudentService,
    pub reports: ReportService,
}

impl Services {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            energy: EnergyService::new(repositories.energy.clone()),
            fuel: FuelService::new(repositories.fuel.clone()),
            oil: OilService::new(repositories.oil.clone()),
            roadtrip: RoadtripService::new(repositories.roadtrip.clone()),
            students: StudentService::new(repositories.students.clone()),
            reports: ReportService::new(
                repositories.fuel.clone(),
                repositories.energy.clone(),
                repositories.oil.clone(),
            ),
        }
    }
}
