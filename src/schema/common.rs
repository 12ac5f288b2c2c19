use poem_openapi::Object;
use serde::{Deserialize, Serialize};

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "internal server error";

#[derive(Object, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BadRequestResponse {
    pub error: String,
}

impl BadRequestResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

#[derive(Object, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NotFoundResponse {
    pub error: String,
}

impl Default for NotFoundResponse {
    fn default() -> Self {
        Self {
            error: "person not found".to_string(),
        }
    }
}

#[derive(Object, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct InternalServerErrorResponse {
    pub error: String,
}

impl InternalServerErrorResponse {
    /// Logs the failing step with its detail and hides the detail from the caller.
    pub fn new(module: &str, function: &str, step: &str, detail: &str) -> Self {
        tracing::error!(
            module = module,
            function = function,
            step = step,
            "{}",
            detail
        );
        Self {
            error: INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

#[derive(Object, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}
