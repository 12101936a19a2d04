use thiserror::Error;

// Bring in specific errors from the modules we want to wrap
use crate::address::AddressError;
use crate::store::StoreError;
use crate::wizard::PromptError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    // Printed with their source chain, so no prefix here
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),
}

pub type AppResult<T> = Result<T, AppError>;
