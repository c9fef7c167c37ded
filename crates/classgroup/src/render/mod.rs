//! Printable PDF rendering of a [`GroupSet`](crate::GroupSet).
//!
//! Rendering happens in two passes:
//!
//! - [`layout`] flows the title, group headers and member lines onto A4 pages,
//!   breaking pages the way a single-column report writer does.
//! - The PDF writer draws each placed line with the builtin Helvetica faces and
//!   serializes the document.
//!
//! Builtin PDF fonts only cover a single-byte Latin encoding, so member names
//! pass through [`to_latin1_lossy`] first. Characters outside Latin-1 become
//! `?`. This is a known limitation of the output format, not of the grouping.

mod latin1;
mod layout;
mod pdf;

pub use latin1::*;
pub use layout::*;

use crate::{Error, GroupSet, Result};

/// MIME type of [`render`]'s output.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// File name offered to browsers downloading the rendered document.
pub const PDF_FILE_NAME: &str = "class_groups.pdf";

/// Renders `groups` as a PDF and returns the serialized bytes.
///
/// `groups` must not be empty; callers are expected to check first. An empty
/// set yields [`Error::EmptyGroupSet`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, fields(groups = groups.len()))
)]
pub fn render(groups: &GroupSet) -> Result<Vec<u8>> {
    if groups.is_empty() {
        return Err(Error::EmptyGroupSet);
    }

    let layout = layout(groups);
    let bytes = pdf::write(&layout)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        pages = layout.pages().len(),
        bytes = bytes.len(),
        "document rendered"
    );

    Ok(bytes)
}
