// verdict-core/src/error.rs

use crate::domain::error::{DomainError, ViolationError};
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerdictError {
    // --- ERREURS DU DOMAINE (Registre) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (IO, Parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- ERREUR LEVÉE PAR UNE VALIDATION ---
    #[error(transparent)]
    Violation(#[from] ViolationError),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for VerdictError {
    fn from(err: std::io::Error) -> Self {
        VerdictError::Infrastructure(InfrastructureError::Io(err))
    }
}
