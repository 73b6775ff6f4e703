use super::email::Email;

/// A validated newsletter signup.
pub struct NewSubscriber {
    pub email: Email,
}
