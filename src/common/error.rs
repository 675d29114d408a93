// src/common/error.rs
use thiserror::Error;

/// 图形层错误
///
/// 帧缓冲区、光栅化和文本排版只会产生这两类错误，与传输层无关
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsError {
    #[error("Coordinate or size outside the framebuffer")]
    OutOfBounds,

    #[error("Invalid parameters")]
    InvalidParams,
}

pub type GraphicsResult<T> = core::result::Result<T, GraphicsError>;

/// 驱动错误
///
/// `E` 为底层传输的错误类型（例如 `embedded_hal::i2c::ErrorKind`）
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError<E> {
    #[error("Display has not been initialized")]
    NotInitialized,

    #[error("Coordinate or size outside the framebuffer")]
    OutOfBounds,

    #[error("Invalid parameters")]
    InvalidParams,

    #[error("Display did not acknowledge the probe")]
    DeviceNotResponding,

    #[error("Transport error: {0:?}")]
    Transport(E),

    #[error("Bulk write of {len} bytes exceeds the staging capacity of {capacity}")]
    BufferTooLarge { len: usize, capacity: usize },
}

impl<E> From<GraphicsError> for DisplayError<E> {
    fn from(err: GraphicsError) -> Self {
        match err {
            GraphicsError::OutOfBounds => DisplayError::OutOfBounds,
            GraphicsError::InvalidParams => DisplayError::InvalidParams,
        }
    }
}

pub type DisplayResult<T, E> = core::result::Result<T, DisplayError<E>>;
