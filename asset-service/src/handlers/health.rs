use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::env;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Assets API running" }))
}

/// Best-effort connectivity report. This endpoint never fails; any store
/// error degrades to a status string capped at 50 characters.
pub async fn diagnostics(State(state): State<AppState>) -> impl IntoResponse {
    let database_url = if env::var("DATABASE_URL").is_ok() {
        "✅ Set"
    } else {
        "❌ Not Set"
    };

    let (database, collections) = match state.db.collection_names().await {
        Ok(mut names) => {
            names.truncate(10);
            ("✅ Connected & Working".to_string(), names)
        }
        Err(e) => (
            format!("⚠️  Connected but Error: {}", truncate(&e.to_string(), 50)),
            Vec::new(),
        ),
    };

    Json(json!({
        "backend": "✅ Running",
        "database": database,
        "database_url": database_url,
        "database_name": state.db.name(),
        "connection_status": "Connected",
        "collections": collections,
    }))
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_caps_long_error_text() {
        let long = "x".repeat(200);
        assert_eq!(truncate(&long, 50).chars().count(), 50);
        assert_eq!(truncate("short", 50), "short");
    }
}
