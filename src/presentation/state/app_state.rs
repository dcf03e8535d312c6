use std::sync::Arc;

use crate::application::services::TopicExtractionService;

#[derive(Clone)]
pub struct AppState {
    pub topic_service: Arc<TopicExtractionService>,
    pub max_upload_bytes: usize,
}
