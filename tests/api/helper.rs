use std::sync::Arc;

use async_trait::async_trait;
use ione_site_api::{
    app::App,
    config::get_configuration,
    domain::{contact::NewContact, subscriber::NewSubscriber},
    storage::{Contact, InMemoryStorage, NewsletterSubscription, Storage, StorageError},
    telemetry::get_subscriber,
};
use once_cell::sync::Lazy;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use tracing_subscriber::util::SubscriberInitExt;

static TRACING: Lazy<()> = Lazy::new(|| {
    let env_filter = "ione_site_api=trace,tower_http=trace,axum::rejection=trace";

    if std::env::var("TEST_LOG").is_ok() {
        get_subscriber(env_filter, std::io::stdout).init();
    } else {
        get_subscriber(env_filter, std::io::sink).init();
    };
});

pub struct TestApp {
    pub addr: String,
    /// Handle on the storage the server was started with. Empty (and
    /// untouched by the server) when the app was spawned with
    /// [`spawn_failing_app`].
    pub storage: Arc<InMemoryStorage>,
}

impl TestApp {
    pub async fn post_contact(&self, body: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/contact", &self.addr))
            .json(&serde_json::from_str::<Value>(body).unwrap())
            .send()
            .await
            .expect("The request should succeed.")
    }

    pub async fn post_newsletter(&self, body: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/newsletter", &self.addr))
            .json(&serde_json::from_str::<Value>(body).unwrap())
            .send()
            .await
            .expect("The request should succeed.")
    }
}

pub async fn spawn_app() -> TestApp {
    let storage = Arc::new(InMemoryStorage::new());
    let addr = serve(storage.clone()).await;

    TestApp { addr, storage }
}

/// Spawns the app on a storage whose every call fails, for exercising the
/// server-error envelope.
pub async fn spawn_failing_app() -> TestApp {
    let addr = serve(Arc::new(FailingStorage)).await;

    TestApp {
        addr,
        storage: Arc::new(InMemoryStorage::new()),
    }
}

async fn serve(storage: Arc<dyn Storage>) -> String {
    Lazy::force(&TRACING);

    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.port = 0;

    let app = App::with(config).await;
    let addr = format!("http://127.0.0.1:{}", app.port());

    let _ = tokio::spawn(async move {
        app.serve(storage)
            .await
            .expect("The server should be running")
    });

    addr
}

struct FailingStorage;

#[async_trait]
impl Storage for FailingStorage {
    async fn create_contact(&self, _contact: NewContact) -> Result<Contact, StorageError> {
        Err(StorageError::Database(sqlx::Error::PoolClosed))
    }

    async fn get_newsletter_by_email(
        &self,
        _email: &str,
    ) -> Result<Option<NewsletterSubscription>, StorageError> {
        Err(StorageError::Database(sqlx::Error::PoolClosed))
    }

    async fn create_newsletter(
        &self,
        _subscriber: NewSubscriber,
    ) -> Result<NewsletterSubscription, StorageError> {
        Err(StorageError::Database(sqlx::Error::PoolClosed))
    }
}

pub fn get_client() -> ClientWithMiddleware {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);

    ClientBuilder::new(reqwest::Client::new())
        .with(TracingMiddleware::default())
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build()
}
