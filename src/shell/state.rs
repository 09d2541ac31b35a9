use crate::modules::licenses::repository::LicenseRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub licenses: Arc<LicenseRepository>,
}
