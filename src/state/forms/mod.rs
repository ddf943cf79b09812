//! Form domain layer
//!
//! Field definitions and their defaults table, the draft being composed,
//! and the cursor state of the builder that edits it.

mod builder;
mod draft;
mod field;

pub use builder::{BuilderFocus, BuilderState, TypePicker};
pub use draft::{
    DraftError, DraftPayload, DraftTab, FormDraft, Preview, PreviewBody, PreviewControl,
    PreviewField,
};
pub use field::{Field, FieldChanges, FieldType};
