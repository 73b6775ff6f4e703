pub mod message;
pub mod name;

use self::message::Message;
use self::name::Name;
use super::email::Email;

/// A fully validated contact-form submission, ready to persist.
///
/// An empty `company` is normalized away before this type is built, so a
/// record never carries a blank field.
pub struct NewContact {
    pub name: Name,
    pub email: Email,
    pub company: Option<String>,
    pub message: Message,
}
