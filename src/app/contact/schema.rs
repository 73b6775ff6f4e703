use serde::Deserialize;

use crate::domain::contact::{message::Message, name::Name, NewContact};
use crate::domain::email::Email;
use crate::storage::Contact;

/// Body of `POST /api/contact`.
///
/// Required fields are `Option` so an absent field is reported through the
/// validation envelope instead of being rejected by the extractor.
#[derive(Deserialize)]
pub struct ContactBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

impl TryFrom<ContactBody> for NewContact {
    type Error = String;
    fn try_from(value: ContactBody) -> Result<Self, Self::Error> {
        // Field order fixes which failure a 400 reports.
        let name = Name::try_from(value.name.unwrap_or_default())?;
        let email = Email::try_from(value.email.unwrap_or_default())?;
        let message = Message::try_from(value.message.unwrap_or_default())?;
        let company = value
            .company
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty());

        Ok(Self {
            name,
            email,
            company,
            message,
        })
    }
}

#[derive(serde::Serialize)]
pub struct ContactCreatedBody {
    pub success: bool,
    pub message: String,
    pub data: Contact,
}
