use serde::Deserialize;

use crate::domain::{email::Email, subscriber::NewSubscriber};
use crate::storage::NewsletterSubscription;

#[derive(Deserialize)]
pub struct SubscribeBody {
    pub email: Option<String>,
}

impl TryFrom<SubscribeBody> for NewSubscriber {
    type Error = String;
    fn try_from(value: SubscribeBody) -> Result<Self, Self::Error> {
        let email = Email::try_from(value.email.unwrap_or_default())?;
        Ok(Self { email })
    }
}

#[derive(serde::Serialize)]
pub struct SubscriptionCreatedBody {
    pub success: bool,
    pub message: String,
    pub data: NewsletterSubscription,
}

#[derive(serde::Serialize)]
pub struct AlreadySubscribedBody {
    pub success: bool,
    pub message: String,
}
