/// Errors raised by the annealing engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnealError {
    /// The configuration would make the acceptance test meaningless
    /// (zero budget, non-positive temperature, cooling rate outside (0, 1)).
    InvalidConfiguration(String),
}

impl std::fmt::Display for AnnealError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnealError::InvalidConfiguration(msg) => {
                write!(f, "invalid annealing configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for AnnealError {}
