//! Userdesk console
//!
//! One-shot listing of users against the remote API. Accepts an optional
//! query string as the first argument, e.g.:
//!
//! ```text
//! userdesk 'search=jane&page=2&limit=25&sortBy=email&sortOrder=ASC'
//! ```

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use userdesk::controllers::{FetchTrigger, ListController, ListPhase};
use userdesk::{ApiClient, Config, MemoryQueryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Using API at {}", config.api_base_url);

    let query = std::env::args().nth(1).unwrap_or_default();
    let store = Arc::new(MemoryQueryStore::new(&query));
    let api = Arc::new(ApiClient::new(&config)?);
    let controller = ListController::new(api, store);

    controller.fetch(FetchTrigger::Load).await;

    let state = controller.state();
    match state.phase {
        ListPhase::Loaded => {
            for user in &state.records {
                println!(
                    "{:>6}  {:<24} {:<28} {:<16} {}",
                    user.id, user.name, user.email, user.country, user.birthday
                );
            }
            if let Some(page) = &state.page {
                let (start, end) = page.display_range();
                println!(
                    "Showing {} to {} of {} (page {}/{})",
                    start, end, page.total_items, page.current_page, page.total_pages
                );
            }
        }
        ListPhase::Failed => {
            if let Some(error) = &state.error {
                tracing::error!(kind = error.kind(), "failed to list users: {}", error);
            }
            std::process::exit(1);
        }
        _ => {}
    }

    Ok(())
}
