use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{contact::NewContact, subscriber::NewSubscriber};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStorage;
pub use postgres::PgStorage;

/// A persisted contact-form submission.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A persisted newsletter subscription. At most one per email.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct NewsletterSubscription {
    pub id: Uuid,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("a record with the same unique key already exists")]
    Duplicate,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// The persistence collaborator behind the intake endpoints.
///
/// Injected into the app so tests can substitute [`InMemoryStorage`] for
/// [`PgStorage`]. Implementations own the newsletter uniqueness guarantee
/// and report a lost insert race as [`StorageError::Duplicate`].
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    async fn create_contact(&self, contact: NewContact) -> Result<Contact, StorageError>;

    async fn get_newsletter_by_email(
        &self,
        email: &str,
    ) -> Result<Option<NewsletterSubscription>, StorageError>;

    async fn create_newsletter(
        &self,
        subscriber: NewSubscriber,
    ) -> Result<NewsletterSubscription, StorageError>;
}
