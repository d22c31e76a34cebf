//! Reading and validating the upload form.
use std::collections::BTreeMap;
use std::fmt;

use actix_multipart::{Field, Multipart, MultipartError};
use futures_util::TryStreamExt as _;
use serde::Serialize;

use crate::utils::email;

/// Name of the email form field.
pub const EMAIL_FIELD: &str = "email";
/// Name of the file form field.
pub const FILE_FIELD: &str = "pdf_file";

/// Message for a missing non-file field.
pub const REQUIRED: &str = "This field is required.";
/// Message for a malformed email.
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
/// Message for a missing file field.
pub const NO_FILE: &str = "No file was submitted.";
/// Message for a zero-byte file.
pub const EMPTY_FILE: &str = "The submitted file is empty.";
/// Message for a `pdf_file` part sent without a filename.
pub const NOT_A_FILE: &str =
    "The submitted data was not a file. Check the encoding type on the form.";

/// Email parts are tiny; anything bigger than this is rejected as invalid.
const MAX_TEXT_FIELD_BYTES: usize = 1024;

/// Validation messages per form field, serialized as `{"field": ["message", ...]}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    /// Record a message against `field`.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// Whether no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded against `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let fields = self.0.keys().copied().collect::<Vec<_>>();
        write!(formatter, "{}", fields.join(", "))
    }
}

/// A `pdf_file` part as received.
#[derive(Debug, Default)]
struct FilePart {
    /// Filename from the part's content disposition.
    filename: Option<String>,
    /// Contents, possibly truncated.
    bytes: Vec<u8>,
    /// Whether the part exceeded the size limit.
    oversized: bool,
}

/// The raw multipart form, before validation.
#[derive(Debug, Default)]
pub struct UploadForm {
    /// Email bytes, `None` if the part was absent.
    email: Option<Vec<u8>>,
    /// The `pdf_file` part, if any.
    file: Option<FilePart>,
    /// Size limit the file was read with.
    max_file_size: usize,
}

/// A validated upload.
#[derive(Debug)]
pub struct Upload {
    /// Trimmed, valid email.
    pub email: String,
    /// Client-supplied filename.
    pub filename: String,
    /// Raw document bytes.
    pub document: Vec<u8>,
}

impl UploadForm {
    /// Read the `email` and `pdf_file` parts of a multipart body. Other parts are
    /// drained and ignored. A body that is not valid multipart ends the read early, so
    /// whatever was not yet received is reported missing by [`Self::validate`].
    pub async fn read(mut payload: Multipart, max_file_size: usize) -> Self {
        let mut form = Self {
            max_file_size,
            ..Self::default()
        };
        loop {
            let mut field = match payload.try_next().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(err) => {
                    tracing::warn!("Unable to read multipart form: {err}");
                    break;
                }
            };
            let disposition = field.content_disposition();
            let name = disposition.get_name().unwrap_or_default().to_owned();
            let filename = disposition.get_filename().map(ToOwned::to_owned);
            let outcome = match name.as_str() {
                EMAIL_FIELD => match read_limited(&mut field, MAX_TEXT_FIELD_BYTES).await {
                    // A truncated email is longer than any valid address.
                    Ok((bytes, true)) => {
                        form.email = Some(bytes);
                        drain(&mut field).await
                    }
                    Ok((bytes, false)) => {
                        form.email = Some(bytes);
                        Ok(())
                    }
                    Err(err) => Err(err),
                },
                FILE_FIELD => match read_limited(&mut field, max_file_size).await {
                    Ok((bytes, oversized)) => {
                        form.file = Some(FilePart {
                            filename,
                            bytes,
                            oversized,
                        });
                        if oversized {
                            // Later parts may still carry the email.
                            drain(&mut field).await
                        } else {
                            Ok(())
                        }
                    }
                    Err(err) => Err(err),
                },
                _ => drain(&mut field).await,
            };
            match outcome {
                Ok(()) => {}
                Err(err) => {
                    tracing::warn!(field = %name, "Unable to read form field: {err}");
                    break;
                }
            }
        }
        form
    }

    /// Check the form, collecting every field error rather than stopping at the first.
    ///
    /// # Errors
    /// Errors with the messages for each invalid field.
    pub fn validate(self) -> Result<Upload, FieldErrors> {
        let mut errors = FieldErrors::default();

        let email = match self.email {
            None => {
                errors.add(EMAIL_FIELD, REQUIRED);
                None
            }
            Some(bytes) => {
                let text = String::from_utf8(bytes).ok();
                let trimmed = text.as_deref().map(str::trim);
                if trimmed.is_some_and(str::is_empty) {
                    errors.add(EMAIL_FIELD, REQUIRED);
                    None
                } else if let Some(trimmed) = trimmed.filter(|value| email::is_valid(value)) {
                    Some(trimmed.to_owned())
                } else {
                    errors.add(EMAIL_FIELD, INVALID_EMAIL);
                    None
                }
            }
        };

        let file = match self.file {
            None => {
                errors.add(FILE_FIELD, NO_FILE);
                None
            }
            Some(FilePart { filename: None, .. }) => {
                errors.add(FILE_FIELD, NOT_A_FILE);
                None
            }
            Some(FilePart { oversized: true, .. }) => {
                errors.add(
                    FILE_FIELD,
                    format!("Ensure this file is at most {} bytes.", self.max_file_size),
                );
                None
            }
            Some(ref part) if part.bytes.is_empty() => {
                errors.add(FILE_FIELD, EMPTY_FILE);
                None
            }
            Some(part) => Some(part),
        };

        match (email, file) {
            (Some(email), Some(part)) if errors.is_empty() => Ok(Upload {
                email,
                filename: part.filename.unwrap_or_default(),
                document: part.bytes,
            }),
            _ => Err(errors),
        }
    }
}

/// Read a field's bytes up to `limit`. Returns the bytes and whether the field was
/// longer than `limit`; reading stops as soon as it is.
async fn read_limited(
    field: &mut Field,
    limit: usize,
) -> Result<(Vec<u8>, bool), MultipartError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await? {
        if bytes.len() + chunk.len() > limit {
            return Ok((bytes, true));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok((bytes, false))
}

/// Consume and discard the rest of a field.
async fn drain(field: &mut Field) -> Result<(), MultipartError> {
    while field.try_next().await?.is_some() {}
    Ok(())
}
