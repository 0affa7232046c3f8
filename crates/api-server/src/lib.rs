pub mod api;
pub mod error;
pub mod state;

use std::sync::Arc;

use application::Services;
use infrastructure::{Repositories, Settings};
use state::AppState;

pub fn setup_app_state(repositories: &Repositories, settings: Settings) -> Arc<AppState> {
    Arc::new(AppState::new(Services::new(repositories), settings))
}
