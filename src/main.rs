use tickerwatch::alerts::{AlertNotifier, WebhookNotifier};
use tickerwatch::config::Config;
use tickerwatch::core::run_once;
use tickerwatch::db::HistoryStore;
use tickerwatch::logging;
use tickerwatch::services::OkxClient;
use tracing::error;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    let source = OkxClient::new(config.okx_base_url.clone());
    let store = HistoryStore::connect(&config).await;
    let notifier: Option<WebhookNotifier> =
        config.alert_webhook_url.as_deref().map(WebhookNotifier::new);

    match run_once(
        &config,
        &source,
        &store,
        notifier.as_ref().map(|n| n as &dyn AlertNotifier),
    )
    .await
    {
        Ok(summary) => match serde_json::to_string(&summary) {
            // Invocation output: one JSON document on stdout.
            Ok(body) => println!("{}", body),
            Err(e) => error!(error = %e, "failed to serialize run summary"),
        },
        Err(e) => {
            error!(error = %e, "invocation failed");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
