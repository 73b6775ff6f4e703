use async_trait::async_trait;
use sqlx::error::DatabaseError;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::{Contact, NewsletterSubscription, Storage, StorageError};
use crate::domain::{contact::NewContact, subscriber::NewSubscriber};

#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PgStorage {
    #[instrument(name = "inserting new contact into the database", skip(self, contact), fields(email = %contact.email))]
    async fn create_contact(&self, contact: NewContact) -> Result<Contact, StorageError> {
        let record = sqlx::query_as::<_, Contact>(
            r#"insert into contacts (id, name, email, company, message, created_at)
            values ($1, $2, $3, $4, $5, $6)
            returning id, name, email, company, message, created_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(contact.name.as_ref())
        .bind(contact.email.as_ref())
        .bind(contact.company.as_deref())
        .bind(contact.message.as_ref())
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(detail = e.to_string(), "failed to save new contact");
            StorageError::from(e)
        })?;

        Ok(record)
    }

    #[instrument(name = "looking up newsletter subscription by email", skip(self, email))]
    async fn get_newsletter_by_email(
        &self,
        email: &str,
    ) -> Result<Option<NewsletterSubscription>, StorageError> {
        let record = sqlx::query_as::<_, NewsletterSubscription>(
            r#"select id, email, subscribed_at from newsletter_subscriptions where email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(detail = e.to_string(), "failed to look up subscription");
            StorageError::from(e)
        })?;

        Ok(record)
    }

    #[instrument(name = "inserting new newsletter subscription into the database", skip(self, subscriber), fields(email = %subscriber.email))]
    async fn create_newsletter(
        &self,
        subscriber: NewSubscriber,
    ) -> Result<NewsletterSubscription, StorageError> {
        let record = sqlx::query_as::<_, NewsletterSubscription>(
            r#"insert into newsletter_subscriptions (id, email, subscribed_at)
            values ($1, $2, $3)
            returning id, email, subscribed_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(subscriber.email.as_ref())
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_error) = &e {
                // The unique index on email settles the lookup-then-insert race.
                if db_error.is_unique_violation() {
                    return StorageError::Duplicate;
                }
            }

            tracing::error!(detail = e.to_string(), "failed to save new subscription");
            StorageError::from(e)
        })?;

        Ok(record)
    }
}
