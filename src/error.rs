use crate::domain::ItemId;
use crate::persistence::PersistenceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Only reachable through stale UI state
    #[error("no item with id {0}")]
    MissingItem(ItemId),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
