//! 通过 I2C mock 驱动门面，校验总线上的完整字节流

use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use ssd1306_oled::{
    Color, DisplayConfig, DisplayError, DisplaySize, FONT_7X10, GlyphTable, I2cTransport, Ssd1306,
};

const ADDR: u8 = 0x3C;

type Display = Ssd1306<I2cTransport<I2cMock, NoopDelay>>;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn cmd(byte: u8) -> I2cTransaction {
    I2cTransaction::write(ADDR, vec![0x00, byte])
}

fn cmds(bytes: &[u8]) -> Vec<I2cTransaction> {
    bytes.iter().copied().map(cmd).collect()
}

/// 每页三条寻址命令加一次 128 字节数据写入
fn frame(pages: u8, page_data: impl Fn(u8) -> Vec<u8>) -> Vec<I2cTransaction> {
    let mut out = Vec::new();
    for page in 0..pages {
        out.extend(cmds(&[0xB0 + page, 0x00, 0x10]));
        let mut data = vec![0x40];
        data.extend(page_data(page));
        out.push(I2cTransaction::write(ADDR, data));
    }
    out
}

fn blank_frame(pages: u8) -> Vec<I2cTransaction> {
    frame(pages, |_| vec![0x00; 128])
}

fn init_transactions(config: &DisplayConfig) -> Vec<I2cTransaction> {
    let mut out = vec![I2cTransaction::write(ADDR, vec![])];
    out.extend(cmds(&[
        0xAE,
        0x20,
        0x10,
        0xB0,
        0xC8,
        0x00,
        0x10,
        0x40,
        0x81,
        config.contrast,
        0xA1,
        0xA6,
        0xA8,
        (config.height() - 1) as u8,
        0xA4,
        0xD3,
        0x00,
        0xD5,
        0xF0,
        0xD9,
        0x22,
        0xDA,
        config.size.com_pins(),
        0xDB,
        0x20,
        0x8D,
        0x14,
        0xAF,
    ]));
    out.push(cmd(0x2E));
    out.extend(blank_frame(config.pages()));
    out
}

/// 已初始化的驱动，`after` 为初始化之后预期的总线事务
fn ready_display(config: DisplayConfig, after: Vec<I2cTransaction>) -> Display {
    init_logger();
    let mut expected = init_transactions(&config);
    expected.extend(after);

    let transport = I2cTransport::from_config(I2cMock::new(&expected), NoopDelay::new(), &config);
    let mut display = Ssd1306::new(transport, config).unwrap();
    display.init().unwrap();
    assert!(display.is_initialized());
    display
}

fn finish(display: Display) {
    let (mut i2c, _) = display.release().release();
    i2c.done();
}

#[test]
fn init_probes_configures_and_blanks_the_panel() {
    let display = ready_display(DisplayConfig::default(), vec![]);

    assert!(display.framebuffer().buffer().iter().all(|&b| b == 0));
    assert_eq!(display.state().cursor.x, 0);
    finish(display);
}

#[test]
fn init_on_the_short_panel_flushes_four_pages() {
    let config = DisplayConfig::default()
        .with_size(DisplaySize::Display128x32)
        .with_contrast(0x8F);

    let display = ready_display(config, vec![]);

    assert_eq!(display.framebuffer().pages(), 4);
    finish(display);
}

#[test]
fn silent_device_is_reported_and_stays_uninitialized() {
    init_logger();
    let config = DisplayConfig::default().with_probe(3, 30);
    let expected = vec![
        I2cTransaction::write(ADDR, vec![]).with_error(ErrorKind::Other),
        I2cTransaction::write(ADDR, vec![]).with_error(ErrorKind::Other),
        I2cTransaction::write(ADDR, vec![]).with_error(ErrorKind::Other),
    ];
    let transport = I2cTransport::from_config(I2cMock::new(&expected), NoopDelay::new(), &config);
    let mut display = Ssd1306::new(transport, config).unwrap();

    assert_eq!(display.init(), Err(DisplayError::DeviceNotResponding));
    assert!(!display.is_initialized());
    assert_eq!(display.update_screen(), Err(DisplayError::NotInitialized));
    finish(display);
}

#[test]
fn uninitialized_driver_refuses_everything_without_bus_traffic() {
    init_logger();
    let config = DisplayConfig::default();
    let transport = I2cTransport::from_config(I2cMock::new(&[]), NoopDelay::new(), &config);
    let mut display = Ssd1306::new(transport, config).unwrap();
    let not_ready = Err(DisplayError::NotInitialized);

    assert_eq!(display.draw_pixel(0, 0, Color::White), not_ready);
    assert_eq!(display.fill(Color::White), not_ready);
    assert_eq!(display.fill_raw(1), not_ready);
    assert_eq!(display.toggle_invert(), not_ready);
    assert_eq!(display.draw_line(0, 0, 5, 5, Color::White), not_ready);
    assert_eq!(display.draw_rectangle(0, 0, 5, 5, Color::White), not_ready);
    assert_eq!(display.fill_rectangle(0, 0, 5, 5, Color::White), not_ready);
    assert_eq!(display.draw_triangle(0, 0, 5, 0, 0, 5, Color::White), not_ready);
    assert_eq!(display.fill_triangle(0, 0, 5, 0, 0, 5, Color::White), not_ready);
    assert_eq!(display.draw_circle(10, 10, 3, Color::White), not_ready);
    assert_eq!(display.fill_circle(10, 10, 3, Color::White), not_ready);
    assert_eq!(display.draw_bitmap(0, 0, &[0xFF], 8, 1, Color::White), not_ready);
    assert_eq!(display.goto_xy(1, 1), not_ready);
    assert_eq!(display.put_char('A', &FONT_7X10, Color::White), not_ready);
    assert_eq!(display.put_string("AB", &FONT_7X10, Color::White), not_ready);
    assert_eq!(display.update_screen(), not_ready);
    assert_eq!(display.clear(), not_ready);
    assert_eq!(display.scroll_right(0, 7), not_ready);
    assert_eq!(display.scroll_left(0, 7), not_ready);
    assert_eq!(display.scroll_diag_right(0, 7), not_ready);
    assert_eq!(display.scroll_diag_left(0, 7), not_ready);
    assert_eq!(display.stop_scroll(), not_ready);
    assert_eq!(display.invert_display(true), not_ready);
    assert_eq!(display.display_on(), not_ready);
    assert_eq!(display.display_off(), not_ready);
    assert_eq!(display.set_contrast(0x10), not_ready);

    assert!(display.framebuffer().buffer().iter().all(|&b| b == 0));
    assert_eq!(display.measure_string("abc", &FONT_7X10).width, 21);
    finish(display);
}

#[test]
fn update_screen_sends_the_framebuffer_page_by_page() {
    let after = frame(8, |page| {
        let mut data = vec![0x00; 128];
        match page {
            0 => data[0] = 0x01,
            7 => data[127] = 0x80,
            _ => {}
        }
        data
    });
    let mut display = ready_display(DisplayConfig::default(), after);

    display.draw_pixel(0, 0, Color::White).unwrap();
    display.draw_pixel(127, 63, Color::White).unwrap();
    display.update_screen().unwrap();

    finish(display);
}

#[test]
fn clear_blanks_and_flushes() {
    let mut display = ready_display(DisplayConfig::default(), blank_frame(8));

    display.fill(Color::White).unwrap();
    display.clear().unwrap();

    assert!(display.framebuffer().buffer().iter().all(|&b| b == 0));
    finish(display);
}

#[test]
fn horizontal_scroll_byte_streams() {
    let mut after = cmds(&[0x26, 0x00, 0x00, 0x00, 0x07, 0x00, 0xFF, 0x2F]);
    after.extend(cmds(&[0x27, 0x00, 0x02, 0x00, 0x03, 0x00, 0xFF, 0x2F]));
    after.push(cmd(0x2E));
    let mut display = ready_display(DisplayConfig::default(), after);

    display.scroll_right(0, 7).unwrap();
    display.scroll_left(2, 3).unwrap();
    display.stop_scroll().unwrap();

    finish(display);
}

#[test]
fn diagonal_scroll_byte_streams() {
    let mut after = cmds(&[0xA3, 0x00, 0x40, 0x29, 0x00, 0x00, 0x00, 0x07, 0x01, 0x2F]);
    after.extend(cmds(&[0xA3, 0x00, 0x40, 0x2A, 0x00, 0x04, 0x00, 0x04, 0x01, 0x2F]));
    let mut display = ready_display(DisplayConfig::default(), after);

    display.scroll_diag_right(0, 7).unwrap();
    display.scroll_diag_left(4, 4).unwrap();

    finish(display);
}

#[test]
fn invalid_scroll_range_is_rejected_before_any_bytes() {
    let mut display = ready_display(DisplayConfig::default(), vec![]);

    assert_eq!(display.scroll_right(5, 2), Err(DisplayError::InvalidParams));
    assert_eq!(display.scroll_left(0, 8), Err(DisplayError::InvalidParams));
    assert_eq!(display.scroll_diag_right(7, 0), Err(DisplayError::InvalidParams));

    finish(display);
}

#[test]
fn power_inversion_and_contrast_commands() {
    let after = cmds(&[0xA7, 0xA6, 0x8D, 0x10, 0xAE, 0x8D, 0x14, 0xAF, 0x81, 0x42]);
    let mut display = ready_display(DisplayConfig::default(), after);

    display.invert_display(true).unwrap();
    display.invert_display(false).unwrap();
    display.display_off().unwrap();
    display.display_on().unwrap();
    display.set_contrast(0x42).unwrap();

    assert_eq!(display.config().contrast, 0x42);
    finish(display);
}

#[test]
fn bus_failure_during_flush_is_propagated() {
    let after = vec![cmd(0xB0).with_error(ErrorKind::Other)];
    let mut display = ready_display(DisplayConfig::default(), after);

    assert_eq!(
        display.update_screen(),
        Err(DisplayError::Transport(ErrorKind::Other))
    );
    finish(display);
}

#[test]
fn text_lands_at_the_cursor() {
    let mut display = ready_display(DisplayConfig::default(), vec![]);

    display.goto_xy(0, 0).unwrap();
    display.put_char('A', &FONT_7X10, Color::White).unwrap();

    let glyph = FONT_7X10.glyph('A');
    let fb = display.framebuffer();
    for y in 0..64 {
        for x in 0..128 {
            let lit = x < 7 && y < 10 && glyph.is_set(x as u8, y as u8);
            assert_eq!(fb.get_pixel(x, y), Some(Color::from(lit)));
        }
    }
    assert_eq!(display.state().cursor.x, 7);
    assert_eq!(display.state().cursor.y, 0);
    finish(display);
}

#[test]
fn shapes_outside_the_panel_leave_the_buffer_untouched() {
    let mut display = ready_display(DisplayConfig::default(), vec![]);

    assert_eq!(
        display.draw_rectangle(120, 0, 10, 5, Color::White),
        Err(DisplayError::OutOfBounds)
    );
    assert_eq!(
        display.fill_circle(2, 30, 5, Color::White),
        Err(DisplayError::OutOfBounds)
    );
    assert_eq!(
        display.draw_rectangle(0, 0, -1, 5, Color::White),
        Err(DisplayError::InvalidParams)
    );
    assert_eq!(display.fill_raw(2), Err(DisplayError::InvalidParams));

    assert!(display.framebuffer().buffer().iter().all(|&b| b == 0));
    finish(display);
}

#[test]
fn failed_reinit_drops_back_to_uninitialized() {
    let config = DisplayConfig::default().with_probe(1, 10);
    let after = vec![I2cTransaction::write(ADDR, vec![]).with_error(ErrorKind::Other)];
    let mut display = ready_display(config, after);
    display.put_char('A', &FONT_7X10, Color::White).unwrap();

    assert_eq!(display.init(), Err(DisplayError::DeviceNotResponding));

    assert!(!display.is_initialized());
    assert_eq!(display.state().cursor.x, 0);
    assert_eq!(display.update_screen(), Err(DisplayError::NotInitialized));
    assert_eq!(
        display.draw_pixel(1, 1, Color::White),
        Err(DisplayError::NotInitialized)
    );
    finish(display);
}

#[test]
fn successful_reinit_homes_the_cursor_and_blanks_the_frame() {
    let config = DisplayConfig::default();
    let after = init_transactions(&config);
    let mut display = ready_display(config, after);
    display.fill_rectangle(10, 10, 5, 5, Color::White).unwrap();
    display.goto_xy(50, 20).unwrap();

    display.init().unwrap();

    assert!(display.is_initialized());
    assert_eq!(display.state().cursor.x, 0);
    assert_eq!(display.state().cursor.y, 0);
    assert!(display.framebuffer().buffer().iter().all(|&b| b == 0));
    finish(display);
}
