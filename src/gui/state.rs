use crate::dashboard::DashboardState;

#[derive(Debug, Clone)]
pub struct AppState {
    pub dashboard: DashboardState,
}

impl AppState {
    pub fn new(dashboard: DashboardState) -> Self {
        Self { dashboard }
    }
}
