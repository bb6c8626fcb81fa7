//! Decoding of the two-file multipart upload.
//!
//! [`UploadForm`] collects parts as they stream in; [`UploadForm::into_pair`]
//! checks both slots are filled and yields an [`UploadedPair`], the only
//! input the compare handler hands to the comparator.

use axum::extract::Multipart;
use tracing::debug;

use filecmp_diff::{compare, ComparisonReport, TextDocument};
use filecmp_protocol::fields;

use crate::error::{ServerError, ServerResult};

/// Both uploaded documents, present by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedPair {
    pub first: TextDocument,
    pub second: TextDocument,
}

impl UploadedPair {
    pub fn compare(&self) -> ComparisonReport {
        compare(&self.first, &self.second)
    }
}

/// Upload slots filled so far.
#[derive(Clone, Debug, Default)]
pub struct UploadForm {
    first: Option<TextDocument>,
    second: Option<TextDocument>,
}

impl UploadForm {
    /// Drain a multipart stream into a form.
    ///
    /// Only parts that carry a filename count as uploaded files. A repeated
    /// `file1`/`file2` part replaces the earlier one.
    pub async fn read(mut multipart: Multipart) -> ServerResult<Self> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_owned();
            let Some(file_name) = field.file_name().map(str::to_owned) else {
                debug!(field = %name, "skipping non-file form part");
                continue;
            };
            let Some(slot) = form.slot_mut(&name) else {
                debug!(field = %name, file = %file_name, "skipping unexpected upload");
                continue;
            };
            let bytes = field.bytes().await?;
            debug!(field = %name, file = %file_name, bytes = bytes.len(), "received upload");
            *slot = Some(TextDocument::from_bytes(file_name, &bytes));
        }
        Ok(form)
    }

    fn slot_mut(&mut self, field: &str) -> Option<&mut Option<TextDocument>> {
        match field {
            fields::FILE1 => Some(&mut self.first),
            fields::FILE2 => Some(&mut self.second),
            _ => None,
        }
    }

    /// Place a document in the slot named `field`. Returns `false` for an
    /// unknown field name.
    pub fn insert(&mut self, field: &str, document: TextDocument) -> bool {
        match self.slot_mut(field) {
            Some(slot) => {
                *slot = Some(document);
                true
            }
            None => false,
        }
    }

    pub fn into_pair(self) -> ServerResult<UploadedPair> {
        match (self.first, self.second) {
            (Some(first), Some(second)) => Ok(UploadedPair { first, second }),
            (first, second) => {
                let missing: Vec<&str> = [
                    first.is_none().then_some(fields::FILE1),
                    second.is_none().then_some(fields::FILE2),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(ServerError::MissingInput(missing.join(", ")))
            }
        }
    }
}
