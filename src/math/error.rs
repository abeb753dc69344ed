// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error(
        "First and last point are not adjacent: distance {distance:.2} px, threshold {threshold:.2} px"
    )]
    EndpointsNotAdjacent { distance: f64, threshold: f64 },

    #[error("Operation '{operation}' is not valid while the selection is {phase}")]
    InvalidState {
        operation: &'static str,
        phase: String, // Anzeigename der SelectionPhase
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

pub type MathResult<T> = Result<T, MathError>;
