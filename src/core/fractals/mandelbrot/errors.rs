use crate::core::actions::cancellation::Cancelled;
use crate::core::data::classification_grid::ClassificationGridError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MandelbrotError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateGridError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error(transparent)]
    Algorithm(#[from] MandelbrotError),
    #[error(transparent)]
    Grid(#[from] ClassificationGridError),
}
