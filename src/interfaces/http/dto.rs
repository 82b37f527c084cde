use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
