mod health;
mod upload_syllabus;

pub use health::health_handler;
pub use upload_syllabus::{ErrorResponse, UploadSyllabusResponse, upload_syllabus_handler};
