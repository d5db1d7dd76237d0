use airease_core::FlightService;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
}

#[derive(Clone)]
pub struct AppState {
    pub flights: FlightService,
    pub auth: AuthConfig,
}
