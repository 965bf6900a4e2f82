//! 고정 메시지를 돌려주는 API 어댑터.

use crate::application::ports::MessageApi;

pub const DEFAULT_MESSAGE: &str = "Hello from the API!";

#[derive(Debug, Clone)]
pub struct StaticMessageApi {
    message: String,
}

impl StaticMessageApi {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for StaticMessageApi {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}

impl MessageApi for StaticMessageApi {
    fn message(&self) -> String {
        self.message.clone()
    }
}
