use performance::AirportCatalog;

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) catalog: AirportCatalog,
}
