use derive_more::Display;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Display)]
#[display(fmt = "{}", _0)]
pub struct Message(String);

impl TryFrom<String> for Message {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err("Message is required".into());
        }

        if value.graphemes(true).count() > 4096 {
            return Err("Message is too long".into());
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
