mod entity;
mod repository;

pub use entity::{Energy, EnergyCategory, EnergyLocation, EnergyPatch, NewEnergy};
pub use repository::EnergyRepository;
