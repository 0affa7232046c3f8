mod entity;
mod repository;

pub use entity::{NewRoadtrip, Roadtrip, RoadtripGroup, RoadtripPatch};
pub use repository::RoadtripRepository;
