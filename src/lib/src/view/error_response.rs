use serde::{Deserialize, Serialize};

/// Error body the server sends with a non success status
///
/// `{"errors": [{"status": 400, "message": "..."}]}`
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ErrorMessage>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorMessage {
    pub status: Option<u16>,
    pub message: String,
}

impl ErrorResponse {
    pub fn full_err_msg(&self) -> String {
        self.errors
            .iter()
            .map(|err| err.message.trim())
            .filter(|msg| !msg.is_empty())
            .collect::<Vec<&str>>()
            .join("\n")
    }
}
