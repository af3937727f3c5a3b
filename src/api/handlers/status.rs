//! Status page handler.

use axum::extract::State;
use axum::http::header::CACHE_CONTROL;
use axum::response::{Html, IntoResponse};

use crate::api::AppState;
use crate::config::{CACHE_TEST_KEY, CACHE_TEST_VALUE, TABLES_PLACEHOLDER};

/// GET `/` - render the connectivity status page.
///
/// Always responds 200 with `Cache-Control: no-store`. Failures in either
/// backing store are logged and degrade to placeholder text in the page
/// body; they never become an HTTP error.
pub async fn status_page(State(state): State<AppState>) -> impl IntoResponse {
    // Fire-and-forget; the response does not wait on the SET.
    state.cache.set_detached(CACHE_TEST_KEY, CACHE_TEST_VALUE);

    // Constructs the pool on the first request. Configuration errors, TLS
    // read failures, acquire timeouts, and query failures all land here.
    let table_names = match state.database.table_names().await {
        Ok(names) => names.join(", "),
        Err(e) => {
            tracing::error!("table listing failed: {}", e);
            TABLES_PLACEHOLDER.to_string()
        }
    };

    let cache_value = match state.cache.get(CACHE_TEST_KEY).await {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            tracing::error!("cache GET failed: {}", e);
            String::new()
        }
    };

    let page = render_status_page(&state.redis_host, &cache_value, &table_names);
    ([(CACHE_CONTROL, "no-store")], Html(page))
}

/// Render the HTML body. Pure, so it tests without any backing store.
fn render_status_page(redis_host: &str, cache_value: &str, table_names: &str) -> String {
    format!(
        r#"<html>
  <head>
  </head>
  <body>
    <h2>Redis Connection Test</h2>
    <p>Connecting to Redis at: {redis_host}</p>
    <p>Value of key just read: {cache_value}</p>
    <hr>
    <h2>Cloud SQL Connection Test</h2>
    <p>Database table names: {table_names}</p>
  </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_embeds_host_value_and_tables() {
        let page = render_status_page("10.0.0.5", "value!", "users, orders");
        assert!(page.contains("Connecting to Redis at: 10.0.0.5"));
        assert!(page.contains("Value of key just read: value!"));
        assert!(page.contains("Database table names: users, orders"));
    }

    #[test]
    fn placeholder_renders_verbatim() {
        let page = render_status_page("127.0.0.1", "", TABLES_PLACEHOLDER);
        assert!(page.contains("PostgreSQL not connected"));
    }
}
