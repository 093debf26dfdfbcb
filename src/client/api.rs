//! Browser-side calls to the server API.

use reqwasm::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use tecnoloc::model::api::ErrorDto;

/// Failed API call, carrying the status so callers can react to specific codes (e.g. 409).
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    /// HTTP status, or 0 when the request never reached the server
    pub status: u16,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

fn network_error(e: reqwasm::Error) -> ApiError {
    ApiError {
        status: 0,
        message: format!("Falha de conexão com o servidor: {}", e),
    }
}

/// Message carried by an error body: the `ErrorDto` text, else the raw body.
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorDto>(body) {
        Ok(error_dto) => error_dto.error,
        Err(_) if !body.trim().is_empty() => body.to_string(),
        Err(_) => format!("Erro {}", status),
    }
}

async fn into_api_error(response: Response) -> ApiError {
    let status = response.status();

    let message = match response.text().await {
        Ok(text) => error_message(status, &text),
        Err(_) => format!("Erro {}", status),
    };

    ApiError { status, message }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(into_api_error(response).await);
    }

    response.json::<T>().await.map_err(|e| ApiError {
        status: response.status(),
        message: format!("Resposta inválida do servidor: {}", e),
    })
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url).send().await.map_err(network_error)?;

    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError {
        status: 0,
        message: format!("Falha ao preparar a requisição: {}", e),
    })?;

    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(network_error)?;

    read_json(response).await
}

pub async fn delete(url: &str) -> Result<(), ApiError> {
    let response = Request::delete(url).send().await.map_err(network_error)?;

    if !response.ok() {
        return Err(into_api_error(response).await);
    }

    Ok(())
}
