use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub doctor_data_path: String,
    pub disease_data_path: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            doctor_data_path: env::var("DOCTOR_DATA_PATH")
                .unwrap_or_else(|_| {
                    warn!("DOCTOR_DATA_PATH not set, using default");
                    "data/docinfo.csv".to_string()
                }),
            disease_data_path: env::var("DISEASE_DATA_PATH")
                .unwrap_or_else(|_| {
                    warn!("DISEASE_DATA_PATH not set, using default");
                    "data/dataset.csv".to_string()
                }),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(|| {
                    warn!("PORT not set or invalid, using default 5000");
                    5000
                }),
        }
    }
}
