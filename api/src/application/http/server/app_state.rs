use std::sync::Arc;

use fieldforce_core::application::FieldForceService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<FieldForceService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FieldForceService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
