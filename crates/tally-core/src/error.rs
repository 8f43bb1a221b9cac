use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Month index out of range: {0} (expected 0..=11)")]
    InvalidMonth(u32),
}
