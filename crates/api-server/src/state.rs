use application::Services;
use infrastructure::Settings;

pub struct AppState {
    pub services: Services,
    pub settings: Settings,
}

impl AppState {
    pub fn new(services: Services, settings: Settings) -> Self {
        Self { services, settings }
    }
}
