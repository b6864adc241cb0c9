//! Card form contents as received from a client.

use cardhub_core::error::AppError;
use cardhub_entity::card::{CardFields, normalize_birthday};
use cardhub_storage::UploadedFile;

/// Text fields and optional files submitted to create or update a card.
///
/// `birthday` is kept raw until [`CardSubmission::fields`] normalizes it.
#[derive(Debug, Clone, Default)]
pub struct CardSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<String>,
    pub profession: Option<String>,
    pub fb_link: Option<String>,
    pub line_link: Option<String>,
    /// Avatar image part.
    pub avatar: Option<UploadedFile>,
    /// vCard part.
    pub vcf: Option<UploadedFile>,
}

impl CardSubmission {
    /// The text fields with the birthday reduced to a date.
    pub fn fields(&self) -> Result<CardFields, AppError> {
        Ok(CardFields {
            name: self.name.clone(),
            email: self.email.clone(),
            birthday: normalize_birthday(self.birthday.as_deref())?,
            profession: self.profession.clone(),
            fb_link: self.fb_link.clone(),
            line_link: self.line_link.clone(),
        })
    }
}
