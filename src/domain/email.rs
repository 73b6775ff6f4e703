use derive_more::Display;
use validator::validate_email;

/// A well-formed email address.
///
/// Shared by the contact form and the newsletter signup; the error carries
/// the message shown to the visitor.
#[derive(Display)]
#[display(fmt = "{}", _0)]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if validate_email(&value) {
            Ok(Self(value))
        } else {
            Err("Please enter a valid email address".into())
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
