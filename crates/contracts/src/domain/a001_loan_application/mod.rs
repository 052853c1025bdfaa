pub mod aggregate;

pub use aggregate::{ApplicationDraft, CreditType, DraftField, ValidationError};
