mod entity;
mod repository;

pub use entity::{NewOil, Oil, OilCategory, OilPatch, OilType};
pub use repository::OilRepository;
