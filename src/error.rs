use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SupportError {
    #[error("item {0:?} contains the key delimiter ':'")]
    DelimiterInItem(String),
    #[error("item renders as an empty string")]
    EmptyItem,
    #[error("universe has {size} distinct items, limit is {limit}")]
    UniverseTooLarge { size: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, SupportError>;
