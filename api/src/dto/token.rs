use serde::{Deserialize, Serialize};

/// Body of `GET /api/token`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
