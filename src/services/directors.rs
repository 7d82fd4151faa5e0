//! Fetch the program director list used to populate the target select.

use gloo_net::http::Request;

use crate::types::{AppError, AppResult, Director};

/// GET the director list. Callers degrade the select control on error or
/// on an empty list; the page itself never fails because of this fetch.
pub async fn fetch_directors(url: &str) -> AppResult<Vec<Director>> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        let snippet: String = text.chars().take(100).collect();
        return Err(AppError::Server(format!(
            "HTTP {} en {}: {}",
            response.status(),
            url,
            snippet
        )));
    }

    let directors = response
        .json::<Vec<Director>>()
        .await
        .map_err(|e| AppError::Server(format!("respuesta inválida: {}", e)))?;

    log::info!("📋 {} directores recibidos", directors.len());
    Ok(directors)
}

#[cfg(test)]
mod tests {
    use crate::types::Director;

    #[test]
    fn director_list_deserialization() {
        let json = r#"[
            {"id": "1032456789", "nombre": "Ana María Rojas"},
            {"id": "79845123", "nombre": "Carlos Pérez"}
        ]"#;

        let directors: Vec<Director> = serde_json::from_str(json).unwrap();
        assert_eq!(directors.len(), 2);
        assert_eq!(directors[0].id, "1032456789");
        assert_eq!(directors[1].nombre, "Carlos Pérez");
    }

    #[test]
    fn empty_director_list_deserializes() {
        let directors: Vec<Director> = serde_json::from_str("[]").unwrap();
        assert!(directors.is_empty());
    }
}
