use crate::domain::errors::DomainError;
use std::sync::PoisonError;

pub fn map_poison<T>(_: PoisonError<T>) -> DomainError {
    DomainError::Persistence("page store lock poisoned".into())
}
