//! Errors raised while building or inspecting values

use crate::symbols::Symbol;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Duplicate field {0} in record")]
    DuplicateField(Symbol),
    #[error("Record has no field named {0}")]
    NoSuchField(Symbol),
    #[error("Expected value of type {expected}, provided {provided}")]
    InvalidType {
        expected: &'static str,
        provided: &'static str,
    },
}

impl Error {
    pub fn invalid_type(expected: &'static str, provided: &'static str) -> Self {
        Self::InvalidType { expected, provided }
    }
}
