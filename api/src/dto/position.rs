use serde::{Deserialize, Serialize};

use ud_core::domain::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionDto {
    pub id: i64,
    pub name: String,
}

impl From<Position> for PositionDto {
    fn from(position: Position) -> Self {
        Self {
            id: position.id,
            name: position.name,
        }
    }
}

/// Body of `GET /api/positions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionsResponse {
    pub positions: Vec<PositionDto>,
}
