use poem_openapi::Object;

use crate::presenter::PresenterError;

#[derive(Object, Debug)]
pub struct MolBlock {
    pub mol_block: String,
}

#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl From<PresenterError> for ErrorMessage {
    fn from(err: PresenterError) -> Self {
        Self::new(err.to_string())
    }
}
