mod entity;
mod repository;

pub use entity::{Fuel, FuelPatch, FuelType, NewFuel};
pub use repository::FuelRepository;
