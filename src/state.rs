// src/state.rs
use std::sync::Arc;

use crate::services::generator::Generator;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub generator: Arc<dyn Generator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }
}
