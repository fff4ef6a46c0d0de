use lift_core::{CoreError, PassengerId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("contract violation: {0}")]
    Contract(#[from] CoreError),

    #[error("passenger {0} is not in the passenger table")]
    UnknownPassenger(PassengerId),
}

pub type SimResult<T> = Result<T, SimError>;
