//! 传输层
//!
//! 驱动只依赖"向某地址的某寄存器写入一个或一串字节"与"探测设备"两类操作，
//! 具体总线实现见 [`I2cTransport`]

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use heapless::Vec;
use log::{trace, warn};
use thiserror::Error;

use crate::common::config::{DisplayConfig, STAGING_CAPACITY};
use crate::common::error::DisplayError;

/// 传输错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError<E> {
    #[error("Bus error: {0:?}")]
    Bus(E),

    #[error("Bulk write of {len} bytes exceeds the staging capacity of {capacity}")]
    BufferTooLarge { len: usize, capacity: usize },
}

impl<E> From<TransportError<E>> for DisplayError<E> {
    fn from(err: TransportError<E>) -> Self {
        match err {
            TransportError::Bus(e) => DisplayError::Transport(e),
            TransportError::BufferTooLarge { len, capacity } => {
                DisplayError::BufferTooLarge { len, capacity }
            }
        }
    }
}

/// 寄存器寻址的传输接口
pub trait Transport {
    type Error: Debug;

    /// 写单个字节
    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        byte: u8,
    ) -> Result<(), TransportError<Self::Error>>;

    /// 在一次总线事务中写入一串字节
    fn write_register_bulk(
        &mut self,
        address: u8,
        register: u8,
        bytes: &[u8],
    ) -> Result<(), TransportError<Self::Error>>;

    /// 在 `timeout_ms` 内探测设备是否应答
    fn probe_device(&mut self, address: u8, timeout_ms: u32) -> bool;
}

/// 控制字节加满载负载
const STAGING_LEN: usize = STAGING_CAPACITY + 1;

/// 基于 embedded-hal I2C 的传输实现
///
/// 寄存器即 SSD1306 的控制字节，与负载拼接后在同一次写事务中发出
pub struct I2cTransport<I2C, D> {
    i2c: I2C,
    delay: D,
    staging: Vec<u8, STAGING_LEN>,
    probe_attempts: u8,
}

impl<I2C, D> I2cTransport<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// 默认探测 10 次
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            staging: Vec::new(),
            probe_attempts: 10,
        }
    }

    /// 按配置中的探测次数创建
    pub fn from_config(i2c: I2C, delay: D, config: &DisplayConfig) -> Self {
        Self::new(i2c, delay).with_probe_attempts(config.probe_attempts)
    }

    /// 设置探测尝试次数（至少 1 次）
    pub fn with_probe_attempts(mut self, attempts: u8) -> Self {
        self.probe_attempts = attempts.max(1);
        self
    }

    /// 取回底层总线与延时对象
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C, D> Transport for I2cTransport<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = I2C::Error;

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        byte: u8,
    ) -> Result<(), TransportError<Self::Error>> {
        self.i2c
            .write(address, &[register, byte])
            .map_err(TransportError::Bus)
    }

    fn write_register_bulk(
        &mut self,
        address: u8,
        register: u8,
        bytes: &[u8],
    ) -> Result<(), TransportError<Self::Error>> {
        if bytes.len() > STAGING_CAPACITY {
            warn!(
                "bulk write of {} bytes rejected, capacity {}",
                bytes.len(),
                STAGING_CAPACITY
            );
            return Err(TransportError::BufferTooLarge {
                len: bytes.len(),
                capacity: STAGING_CAPACITY,
            });
        }

        let overflow = || TransportError::BufferTooLarge {
            len: bytes.len(),
            capacity: STAGING_CAPACITY,
        };
        self.staging.clear();
        self.staging.push(register).map_err(|_| overflow())?;
        self.staging
            .extend_from_slice(bytes)
            .map_err(|_| overflow())?;

        trace!("i2c 0x{:02X}: reg 0x{:02X}, {} bytes", address, register, bytes.len());
        self.i2c
            .write(address, &self.staging)
            .map_err(TransportError::Bus)
    }

    fn probe_device(&mut self, address: u8, timeout_ms: u32) -> bool {
        let attempts = self.probe_attempts.max(1);
        let interval = timeout_ms / attempts as u32;

        for attempt in 1..=attempts {
            match self.i2c.write(address, &[]) {
                Ok(()) => {
                    trace!("device 0x{:02X} acknowledged on attempt {}", address, attempt);
                    return true;
                }
                Err(e) => {
                    trace!("probe 0x{:02X} attempt {} failed: {:?}", address, attempt, e);
                }
            }
            if attempt < attempts {
                self.delay.delay_ms(interval);
            }
        }

        warn!("device 0x{:02X} did not respond after {} attempts", address, attempts);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn single_byte_write_prefixes_the_register() {
        let mut transport = I2cTransport::new(
            I2cMock::new(&[I2cTransaction::write(0x3C, vec![0x00, 0xAF])]),
            NoopDelay::new(),
        );

        transport.write_register(0x3C, 0x00, 0xAF).unwrap();

        transport.release().0.done();
    }

    #[test]
    fn bulk_write_sends_one_transaction() {
        let mut expected = vec![0x40];
        expected.extend_from_slice(&[0xAA; 256]);
        let mut transport = I2cTransport::new(
            I2cMock::new(&[I2cTransaction::write(0x3C, expected)]),
            NoopDelay::new(),
        );

        transport.write_register_bulk(0x3C, 0x40, &[0xAA; 256]).unwrap();

        transport.release().0.done();
    }

    #[test]
    fn oversized_bulk_write_is_rejected_before_touching_the_bus() {
        let mut transport = I2cTransport::new(I2cMock::new(&[]), NoopDelay::new());

        let result = transport.write_register_bulk(0x3C, 0x40, &[0u8; 257]);

        assert_eq!(
            result,
            Err(TransportError::BufferTooLarge {
                len: 257,
                capacity: 256
            })
        );
        transport.release().0.done();
    }

    #[test]
    fn bus_errors_are_reported() {
        let mut transport = I2cTransport::new(
            I2cMock::new(&[I2cTransaction::write(0x3C, vec![0x00, 0xAE]).with_error(ErrorKind::Other)]),
            NoopDelay::new(),
        );

        assert_eq!(
            transport.write_register(0x3C, 0x00, 0xAE),
            Err(TransportError::Bus(ErrorKind::Other))
        );
        transport.release().0.done();
    }

    #[test]
    fn probe_retries_until_acknowledged() {
        let mut transport = I2cTransport::new(
            I2cMock::new(&[
                I2cTransaction::write(0x3C, vec![]).with_error(ErrorKind::Other),
                I2cTransaction::write(0x3C, vec![]),
            ]),
            NoopDelay::new(),
        )
        .with_probe_attempts(3);

        assert!(transport.probe_device(0x3C, 300));
        transport.release().0.done();
    }

    #[test]
    fn probe_gives_up_after_the_configured_attempts() {
        let mut transport = I2cTransport::new(
            I2cMock::new(&[
                I2cTransaction::write(0x3D, vec![]).with_error(ErrorKind::Other),
                I2cTransaction::write(0x3D, vec![]).with_error(ErrorKind::Other),
            ]),
            NoopDelay::new(),
        )
        .with_probe_attempts(2);

        assert!(!transport.probe_device(0x3D, 100));
        transport.release().0.done();
    }

    #[test]
    fn transport_errors_flatten_into_display_errors() {
        let bus: DisplayError<ErrorKind> = TransportError::Bus(ErrorKind::Other).into();
        let big: DisplayError<ErrorKind> = TransportError::BufferTooLarge {
            len: 300,
            capacity: 256,
        }
        .into();

        assert_eq!(bus, DisplayError::Transport(ErrorKind::Other));
        assert_eq!(big, DisplayError::BufferTooLarge { len: 300, capacity: 256 });
    }
}
