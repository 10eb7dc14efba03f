use thiserror::Error;

/// Errors raised by core parsing helpers.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown view: {0} (expected one of {views})", views = crate::View::ALL_VARIANTS_STR)]
    UnknownView(String),
}
