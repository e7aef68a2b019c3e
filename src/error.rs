use thiserror::Error;

// 插入失败时链表保持原样
// 查不到不算错误，用Option表示
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("hub name must not be empty")]
    EmptyName,
    #[error("hour {0} is outside 0-23")]
    InvalidHour(u8),
    #[error("Memory allocation failed")]
    OutOfMemory,
}
