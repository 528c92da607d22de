use std::sync::Arc;

use crate::config::Config;
use crate::render::RenderMode;
use crate::resume::loader::ResumeLoader;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only immutable configuration; every request reads the data source afresh.
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<ResumeLoader>,
    pub render_mode: RenderMode,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            loader: Arc::new(ResumeLoader::new(config.resume_json_path.clone())),
            render_mode: config.render_mode,
        }
    }
}
