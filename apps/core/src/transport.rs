use serde::{Deserialize, Serialize};

use crate::contract::{PaletteRequest, PaletteResponse};
use crate::palette_service::{PaletteService, ServiceError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidJson,
    ItemNotFound,
    NotActionable,
    Fixture,
    Config,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransportResponse {
    Ok { response: PaletteResponse },
    Err { error: ErrorResponse },
}

pub fn handle_request(service: &mut PaletteService, request: PaletteRequest) -> TransportResponse {
    match service.handle_command(request) {
        Ok(response) => TransportResponse::Ok { response },
        Err(error) => TransportResponse::Err {
            error: map_service_error(error),
        },
    }
}

pub fn handle_json(service: &mut PaletteService, payload: &str) -> String {
    let response = match serde_json::from_str::<PaletteRequest>(payload) {
        Ok(request) => handle_request(service, request),
        Err(error) => TransportResponse::Err {
            error: ErrorResponse {
                code: ErrorCode::InvalidJson,
                message: error.to_string(),
            },
        },
    };

    serde_json::to_string(&response).expect("transport response should serialize")
}

fn map_service_error(error: ServiceError) -> ErrorResponse {
    let message = error.to_string();
    let code = match error {
        ServiceError::ItemNotFound(_) => ErrorCode::ItemNotFound,
        ServiceError::NotActionable(_) => ErrorCode::NotActionable,
        ServiceError::Fixture(_) => ErrorCode::Fixture,
        ServiceError::Config(_) => ErrorCode::Config,
    };
    ErrorResponse { code, message }
}
