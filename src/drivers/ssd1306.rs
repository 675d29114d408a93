//! SSD1306 驱动门面
//!
//! 持有传输、配置、帧缓冲区与文本光标。所有绘制与同步操作都要求先 [`Ssd1306::init`] 成功，
//! 否则返回 `NotInitialized` 且不产生任何总线访问。

use log::{info, warn};

use super::protocol::{self, ScrollDirection};
use super::transport::Transport;
use crate::common::config::DisplayConfig;
use crate::common::error::{DisplayError, DisplayResult};
use crate::graphics::color::Color;
use crate::graphics::fonts::GlyphTable;
use crate::graphics::framebuffer::Framebuffer;
use crate::graphics::primitives;
use crate::graphics::text::{Cursor, StringSize, measure_string};

/// 驱动运行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DriverState {
    pub cursor: Cursor,
    pub initialized: bool,
}

/// SSD1306 显示驱动
pub struct Ssd1306<T: Transport> {
    transport: T,
    config: DisplayConfig,
    framebuffer: Framebuffer,
    state: DriverState,
}

impl<T: Transport> Ssd1306<T> {
    /// 创建驱动，不访问总线
    pub fn new(transport: T, config: DisplayConfig) -> DisplayResult<Self, T::Error> {
        config.validate()?;
        let framebuffer = Framebuffer::new(config.width(), config.height())?;

        Ok(Self {
            transport,
            config,
            framebuffer,
            state: DriverState::default(),
        })
    }

    /// 探测设备、发送配置序列、停止滚动并清屏
    ///
    /// 先复位光标与初始化标志，任一步失败时保持未初始化状态
    pub fn init(&mut self) -> DisplayResult<(), T::Error> {
        self.state = DriverState::default();
        let address = self.config.address;
        info!("initializing SSD1306 at 0x{:02X}", address);

        if !self
            .transport
            .probe_device(address, self.config.probe_timeout_ms)
        {
            warn!("SSD1306 at 0x{:02X} not responding", address);
            return Err(DisplayError::DeviceNotResponding);
        }

        protocol::configure(&mut self.transport, &self.config)?;
        protocol::stop_scroll(&mut self.transport, address)?;

        self.framebuffer.fill(Color::Black);
        protocol::flush(&mut self.transport, address, &self.framebuffer)?;

        self.state.initialized = true;
        info!("SSD1306 ready");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.initialized
    }

    pub fn state(&self) -> &DriverState {
        &self.state
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// 取回传输对象
    pub fn release(self) -> T {
        self.transport
    }

    fn ensure_initialized(&self) -> DisplayResult<(), T::Error> {
        if self.state.initialized {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }

    /// 初始化后才可写的帧缓冲区
    pub(crate) fn canvas(&mut self) -> DisplayResult<&mut Framebuffer, T::Error> {
        self.ensure_initialized()?;
        Ok(&mut self.framebuffer)
    }

    // ---- 帧缓冲区 ----

    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> DisplayResult<(), T::Error> {
        Ok(self.canvas()?.set_pixel(x, y, color)?)
    }

    pub fn fill(&mut self, color: Color) -> DisplayResult<(), T::Error> {
        self.canvas()?.fill(color);
        Ok(())
    }

    /// 以原始颜色码（0 黑 / 1 白）填充
    pub fn fill_raw(&mut self, color: u8) -> DisplayResult<(), T::Error> {
        Ok(self.canvas()?.fill_raw(color)?)
    }

    /// 软件反色：翻转缓冲区并切换反色标志
    pub fn toggle_invert(&mut self) -> DisplayResult<(), T::Error> {
        self.canvas()?.toggle_invert();
        Ok(())
    }

    // ---- 图形 ----

    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) -> DisplayResult<(), T::Error> {
        Ok(primitives::line(self.canvas()?, x0, y0, x1, y1, color)?)
    }

    pub fn draw_rectangle(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    ) -> DisplayResult<(), T::Error> {
        Ok(primitives::rectangle(self.canvas()?, x, y, w, h, color)?)
    }

    pub fn fill_rectangle(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    ) -> DisplayResult<(), T::Error> {
        Ok(primitives::filled_rectangle(self.canvas()?, x, y, w, h, color)?)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: Color,
    ) -> DisplayResult<(), T::Error> {
        Ok(primitives::triangle(self.canvas()?, x1, y1, x2, y2, x3, y3, color)?)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: Color,
    ) -> DisplayResult<(), T::Error> {
        Ok(primitives::filled_triangle(
            self.canvas()?,
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
            color,
        )?)
    }

    pub fn draw_circle(&mut self, x: i32, y: i32, r: i32, color: Color) -> DisplayResult<(), T::Error> {
        Ok(primitives::circle(self.canvas()?, x, y, r, color)?)
    }

    pub fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Color) -> DisplayResult<(), T::Error> {
        Ok(primitives::filled_circle(self.canvas()?, x, y, r, color)?)
    }

    /// 位图（每行按字节对齐，高位在左）
    pub fn draw_bitmap(
        &mut self,
        x: i32,
        y: i32,
        bits: &[u8],
        w: i32,
        h: i32,
        color: Color,
    ) -> DisplayResult<(), T::Error> {
        Ok(primitives::bitmap(self.canvas()?, x, y, bits, w, h, color)?)
    }

    // ---- 文本 ----

    pub fn goto_xy(&mut self, x: i32, y: i32) -> DisplayResult<(), T::Error> {
        self.ensure_initialized()?;
        Ok(self.state.cursor.goto(&self.framebuffer, x, y)?)
    }

    pub fn put_char<F: GlyphTable + ?Sized>(
        &mut self,
        ch: char,
        font: &F,
        color: Color,
    ) -> DisplayResult<(), T::Error> {
        self.ensure_initialized()?;
        Ok(self
            .state
            .cursor
            .put_char(&mut self.framebuffer, ch, font, color)?)
    }

    pub fn put_string<F: GlyphTable + ?Sized>(
        &mut self,
        text: &str,
        font: &F,
        color: Color,
    ) -> DisplayResult<(), T::Error> {
        self.ensure_initialized()?;
        Ok(self
            .state
            .cursor
            .put_string(&mut self.framebuffer, text, font, color)?)
    }

    /// 纯计算，不要求初始化
    pub fn measure_string<F: GlyphTable + ?Sized>(&self, text: &str, font: &F) -> StringSize {
        measure_string(text, font)
    }

    // ---- 同步 ----

    /// 把整个帧缓冲区写入显存
    pub fn update_screen(&mut self) -> DisplayResult<(), T::Error> {
        self.ensure_initialized()?;
        protocol::flush(&mut self.transport, self.config.address, &self.framebuffer)?;
        Ok(())
    }

    /// 清为黑色并刷新
    pub fn clear(&mut self) -> DisplayResult<(), T::Error> {
        self.fill(Color::Black)?;
        self.update_screen()
    }

    pub fn scroll_right(&mut self, start: u8, end: u8) -> DisplayResult<(), T::Error> {
        self.scroll(ScrollDirection::Right, start, end, false)
    }

    pub fn scroll_left(&mut self, start: u8, end: u8) -> DisplayResult<(), T::Error> {
        self.scroll(ScrollDirection::Left, start, end, false)
    }

    pub fn scroll_diag_right(&mut self, start: u8, end: u8) -> DisplayResult<(), T::Error> {
        self.scroll(ScrollDirection::Right, start, end, true)
    }

    pub fn scroll_diag_left(&mut self, start: u8, end: u8) -> DisplayResult<(), T::Error> {
        self.scroll(ScrollDirection::Left, start, end, true)
    }

    fn scroll(
        &mut self,
        direction: ScrollDirection,
        start: u8,
        end: u8,
        diagonal: bool,
    ) -> DisplayResult<(), T::Error> {
        self.ensure_initialized()?;
        if let Err(e) = protocol::validate_scroll_range(start, end, self.config.pages()) {
            warn!("scroll range {}..={} rejected", start, end);
            return Err(e.into());
        }

        if diagonal {
            protocol::scroll_diagonal(&mut self.transport, &self.config, direction, start, end)?;
        } else {
            protocol::scroll_horizontal(&mut self.transport, &self.config, direction, start, end)?;
        }
        Ok(())
    }

    pub fn stop_scroll(&mut self) -> DisplayResult<(), T::Error> {
        self.ensure_initialized()?;
        protocol::stop_scroll(&mut self.transport, self.config.address)?;
        Ok(())
    }

    /// 硬件反色，显存内容不变
    pub fn invert_display(&mut self, inverted: bool) -> DisplayResult<(), T::Error> {
        self.ensure_initialized()?;
        protocol::invert(&mut self.transport, self.config.address, inverted)?;
        Ok(())
    }

    pub fn display_on(&mut self) -> DisplayResult<(), T::Error> {
        self.ensure_initialized()?;
        protocol::display_on(&mut self.transport, self.config.address)?;
        Ok(())
    }

    pub fn display_off(&mut self) -> DisplayResult<(), T::Error> {
        self.ensure_initialized()?;
        protocol::display_off(&mut self.transport, self.config.address)?;
        Ok(())
    }

    pub fn set_contrast(&mut self, value: u8) -> DisplayResult<(), T::Error> {
        self.ensure_initialized()?;
        protocol::set_contrast(&mut self.transport, self.config.address, value)?;
        self.config.contrast = value;
        Ok(())
    }
}
