//! 显示驱动
//!
//! `command` 为命令字节表，`protocol` 组装命令序列，`transport` 负责总线访问，
//! `ssd1306` 是对外的驱动门面

pub mod command;
pub mod protocol;
pub mod ssd1306;
pub mod transport;

pub use protocol::ScrollDirection;
pub use ssd1306::{DriverState, Ssd1306};
pub use transport::{I2cTransport, Transport, TransportError};
