use std::sync::Arc;

use nutridecode_core::application::NutriDecodeService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriDecodeService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriDecodeService) -> Self {
        Self { args, service }
    }
}
