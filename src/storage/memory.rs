use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::{Contact, NewsletterSubscription, Storage, StorageError};
use crate::domain::{contact::NewContact, subscriber::NewSubscriber};

/// Storage backed by process memory.
///
/// Stands in for [`super::PgStorage`] in tests and local runs without a
/// database. Enforces the same one-subscription-per-email rule.
#[derive(Default)]
pub struct InMemoryStorage {
    contacts: Mutex<Vec<Contact>>,
    subscriptions: Mutex<Vec<NewsletterSubscription>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().expect("storage lock poisoned").clone()
    }

    pub fn subscriptions(&self) -> Vec<NewsletterSubscription> {
        self.subscriptions
            .lock()
            .expect("storage lock poisoned")
            .clone()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_contact(&self, contact: NewContact) -> Result<Contact, StorageError> {
        let record = Contact {
            id: Uuid::new_v4(),
            name: contact.name.as_ref().to_owned(),
            email: contact.email.as_ref().to_owned(),
            company: contact.company,
            message: contact.message.as_ref().to_owned(),
            created_at: chrono::Utc::now(),
        };

        let mut contacts = self.contacts.lock().expect("storage lock poisoned");
        contacts.push(record.clone());

        Ok(record)
    }

    async fn get_newsletter_by_email(
        &self,
        email: &str,
    ) -> Result<Option<NewsletterSubscription>, StorageError> {
        let subscriptions = self.subscriptions.lock().expect("storage lock poisoned");

        Ok(subscriptions.iter().find(|s| s.email == email).cloned())
    }

    async fn create_newsletter(
        &self,
        subscriber: NewSubscriber,
    ) -> Result<NewsletterSubscription, StorageError> {
        let mut subscriptions = self.subscriptions.lock().expect("storage lock poisoned");

        if subscriptions
            .iter()
            .any(|s| s.email == subscriber.email.as_ref())
        {
            return Err(StorageError::Duplicate);
        }

        let record = NewsletterSubscription {
            id: Uuid::new_v4(),
            email: subscriber.email.as_ref().to_owned(),
            subscribed_at: chrono::Utc::now(),
        };
        subscriptions.push(record.clone());

        Ok(record)
    }
}
