//! 光栅化算法
//!
//! 所有图形在写入任何像素之前先整体检查覆盖范围，范围越界返回 `OutOfBounds`，
//! 尺寸为负返回 `InvalidParams`。检查通过后逐点调用 [`Framebuffer::set_pixel`]。
//! 全部使用有符号整数运算。

use super::color::Color;
use super::framebuffer::Framebuffer;
use crate::common::error::{GraphicsError, GraphicsResult};

fn ensure_point(fb: &Framebuffer, x: i32, y: i32) -> GraphicsResult<()> {
    if fb.contains(x, y) {
        Ok(())
    } else {
        Err(GraphicsError::OutOfBounds)
    }
}

/// 检查 `x..=x+w`、`y..=y+h` 的闭区间范围
fn ensure_extent(fb: &Framebuffer, x: i32, y: i32, w: i32, h: i32) -> GraphicsResult<()> {
    if w < 0 || h < 0 {
        return Err(GraphicsError::InvalidParams);
    }
    let x1 = x.checked_add(w).ok_or(GraphicsError::OutOfBounds)?;
    let y1 = y.checked_add(h).ok_or(GraphicsError::OutOfBounds)?;
    ensure_point(fb, x, y)?;
    ensure_point(fb, x1, y1)
}

/// 画线（Bresenham）
pub fn line(
    fb: &mut Framebuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) -> GraphicsResult<()> {
    ensure_point(fb, x0, y0)?;
    ensure_point(fb, x1, y1)?;
    draw_line(fb, x0, y0, x1, y1, color)
}

fn draw_line(
    fb: &mut Framebuffer,
    mut x0: i32,
    mut y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) -> GraphicsResult<()> {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();

    // 竖线
    if dx == 0 {
        for y in y0.min(y1)..=y0.max(y1) {
            fb.set_pixel(x0, y, color)?;
        }
        return Ok(());
    }

    // 横线
    if dy == 0 {
        for x in x0.min(x1)..=x0.max(x1) {
            fb.set_pixel(x, y0, color)?;
        }
        return Ok(());
    }

    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = (if dx > dy { dx } else { -dy }) >> 1;

    loop {
        fb.set_pixel(x0, y0, color)?;
        if x0 == x1 && y0 == y1 {
            return Ok(());
        }
        let e2 = err;
        if e2 > -dx {
            err -= dy;
            x0 += sx;
        }
        if e2 < dy {
            err += dx;
            y0 += sy;
        }
    }
}

/// 矩形边框，覆盖 `x..=x+w`、`y..=y+h`
pub fn rectangle(
    fb: &mut Framebuffer,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: Color,
) -> GraphicsResult<()> {
    ensure_extent(fb, x, y, w, h)?;

    draw_line(fb, x, y, x + w, y, color)?;
    draw_line(fb, x, y + h, x + w, y + h, color)?;
    draw_line(fb, x, y, x, y + h, color)?;
    draw_line(fb, x + w, y, x + w, y + h, color)
}

/// 实心矩形，逐行画 `h + 1` 条横线
pub fn filled_rectangle(
    fb: &mut Framebuffer,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: Color,
) -> GraphicsResult<()> {
    ensure_extent(fb, x, y, w, h)?;

    for row in y..=y + h {
        draw_line(fb, x, row, x + w, row, color)?;
    }
    Ok(())
}

/// 三角形边框
#[allow(clippy::too_many_arguments)]
pub fn triangle(
    fb: &mut Framebuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    x3: i32,
    y3: i32,
    color: Color,
) -> GraphicsResult<()> {
    ensure_point(fb, x1, y1)?;
    ensure_point(fb, x2, y2)?;
    ensure_point(fb, x3, y3)?;

    draw_line(fb, x1, y1, x2, y2, color)?;
    draw_line(fb, x2, y2, x3, y3, color)?;
    draw_line(fb, x3, y3, x1, y1, color)
}

/// 实心三角形
///
/// 沿顶点 1 到顶点 2 的边做整数 DDA 步进，每一步向顶点 3 连线；
/// 最后再描一遍边框，保证填充结果覆盖边框
#[allow(clippy::too_many_arguments)]
pub fn filled_triangle(
    fb: &mut Framebuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    x3: i32,
    y3: i32,
    color: Color,
) -> GraphicsResult<()> {
    ensure_point(fb, x1, y1)?;
    ensure_point(fb, x2, y2)?;
    ensure_point(fb, x3, y3)?;

    let deltax = (x2 - x1).abs();
    let deltay = (y2 - y1).abs();
    let xstep = if x2 >= x1 { 1 } else { -1 };
    let ystep = if y2 >= y1 { 1 } else { -1 };

    // (xinc1, yinc1) 在累加器溢出时生效，(xinc2, yinc2) 每步生效
    let (xinc1, yinc1, xinc2, yinc2, den, mut num, numadd, numpixels) = if deltax >= deltay {
        (0, ystep, xstep, 0, deltax, deltax / 2, deltay, deltax)
    } else {
        (xstep, 0, 0, ystep, deltay, deltay / 2, deltax, deltay)
    };

    let (mut x, mut y) = (x1, y1);
    for _ in 0..=numpixels {
        draw_line(fb, x, y, x3, y3, color)?;

        num += numadd;
        if num >= den {
            num -= den;
            x += xinc1;
            y += yinc1;
        }
        x += xinc2;
        y += yinc2;
    }

    draw_line(fb, x1, y1, x2, y2, color)?;
    draw_line(fb, x2, y2, x3, y3, color)?;
    draw_line(fb, x3, y3, x1, y1, color)
}

fn ensure_circle(fb: &Framebuffer, x0: i32, y0: i32, r: i32) -> GraphicsResult<()> {
    if r < 0 {
        return Err(GraphicsError::InvalidParams);
    }
    let left = x0.checked_sub(r).ok_or(GraphicsError::OutOfBounds)?;
    let top = y0.checked_sub(r).ok_or(GraphicsError::OutOfBounds)?;
    let diameter = r.checked_mul(2).ok_or(GraphicsError::OutOfBounds)?;
    ensure_extent(fb, left, top, diameter, diameter)
}

/// 圆（中点画圆法，八分对称）
pub fn circle(fb: &mut Framebuffer, x0: i32, y0: i32, r: i32, color: Color) -> GraphicsResult<()> {
    ensure_circle(fb, x0, y0, r)?;

    let mut f = 1 - r;
    let mut ddf_x = 1;
    let mut ddf_y = -2 * r;
    let mut x = 0;
    let mut y = r;

    fb.set_pixel(x0, y0 + r, color)?;
    fb.set_pixel(x0, y0 - r, color)?;
    fb.set_pixel(x0 + r, y0, color)?;
    fb.set_pixel(x0 - r, y0, color)?;

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x;

        fb.set_pixel(x0 + x, y0 + y, color)?;
        fb.set_pixel(x0 - x, y0 + y, color)?;
        fb.set_pixel(x0 + x, y0 - y, color)?;
        fb.set_pixel(x0 - x, y0 - y, color)?;

        fb.set_pixel(x0 + y, y0 + x, color)?;
        fb.set_pixel(x0 - y, y0 + x, color)?;
        fb.set_pixel(x0 + y, y0 - x, color)?;
        fb.set_pixel(x0 - y, y0 - x, color)?;
    }
    Ok(())
}

/// 实心圆：与 [`circle`] 相同的判别循环，对称点之间以横线相连
pub fn filled_circle(
    fb: &mut Framebuffer,
    x0: i32,
    y0: i32,
    r: i32,
    color: Color,
) -> GraphicsResult<()> {
    ensure_circle(fb, x0, y0, r)?;

    let mut f = 1 - r;
    let mut ddf_x = 1;
    let mut ddf_y = -2 * r;
    let mut x = 0;
    let mut y = r;

    fb.set_pixel(x0, y0 + r, color)?;
    fb.set_pixel(x0, y0 - r, color)?;
    draw_line(fb, x0 - r, y0, x0 + r, y0, color)?;

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x;

        draw_line(fb, x0 - x, y0 + y, x0 + x, y0 + y, color)?;
        draw_line(fb, x0 - x, y0 - y, x0 + x, y0 - y, color)?;

        draw_line(fb, x0 - y, y0 + x, x0 + y, y0 + x, color)?;
        draw_line(fb, x0 - y, y0 - x, x0 + y, y0 - x, color)?;
    }
    Ok(())
}

/// 位图
///
/// 每行按整字节对齐，字节最高位为最左列；只绘制置位的像素，其余保持不变
pub fn bitmap(
    fb: &mut Framebuffer,
    x: i32,
    y: i32,
    bits: &[u8],
    w: i32,
    h: i32,
    color: Color,
) -> GraphicsResult<()> {
    if w < 0 || h < 0 {
        return Err(GraphicsError::InvalidParams);
    }
    if w == 0 || h == 0 {
        return Ok(());
    }

    let byte_width = ((w + 7) >> 3) as usize;
    if bits.len() < byte_width * h as usize {
        return Err(GraphicsError::InvalidParams);
    }
    ensure_extent(fb, x, y, w - 1, h - 1)?;

    for (j, row) in bits.chunks(byte_width).take(h as usize).enumerate() {
        for i in 0..w as usize {
            if row[i >> 3] & (0x80 >> (i & 0x07)) != 0 {
                fb.set_pixel(x + i as i32, y + j as i32, color)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn blank() -> Framebuffer {
        Framebuffer::new(128, 64).unwrap()
    }

    fn lit(fb: &Framebuffer) -> BTreeSet<(i32, i32)> {
        let mut pixels = BTreeSet::new();
        for y in 0..fb.height() as i32 {
            for x in 0..fb.width() as i32 {
                if fb.get_pixel(x, y) == Some(Color::White) {
                    pixels.insert((x, y));
                }
            }
        }
        pixels
    }

    #[test]
    fn horizontal_line_is_exact() {
        let mut fb = blank();
        line(&mut fb, 0, 0, 4, 0, Color::White).unwrap();

        let expected: BTreeSet<_> = (0..=4).map(|x| (x, 0)).collect();
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn diagonal_line_is_exact() {
        let mut fb = blank();
        line(&mut fb, 0, 0, 3, 3, Color::White).unwrap();

        let expected: BTreeSet<_> = (0..=3).map(|i| (i, i)).collect();
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn line_leaves_other_pixels_alone() {
        let mut fb = blank();
        fb.set_pixel(50, 50, Color::White).unwrap();
        line(&mut fb, 10, 20, 10, 25, Color::White).unwrap();

        let pixels = lit(&fb);
        assert_eq!(pixels.len(), 7);
        assert!(pixels.contains(&(50, 50)));
    }

    #[test]
    fn steep_line_reaches_its_endpoints() {
        let mut fb = blank();
        line(&mut fb, 7, 40, 2, 3, Color::White).unwrap();

        let pixels = lit(&fb);
        assert!(pixels.contains(&(7, 40)));
        assert!(pixels.contains(&(2, 3)));
        // 陡峭直线每行恰好一个像素
        assert_eq!(pixels.len(), 38);
    }

    #[test]
    fn out_of_range_line_is_rejected_up_front() {
        let mut fb = blank();

        assert_eq!(line(&mut fb, 0, 0, 128, 0, Color::White), Err(GraphicsError::OutOfBounds));
        assert_eq!(line(&mut fb, -1, 0, 5, 0, Color::White), Err(GraphicsError::OutOfBounds));
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn rectangle_outline_covers_inclusive_edges() {
        let mut fb = blank();
        rectangle(&mut fb, 2, 3, 4, 2, Color::White).unwrap();

        let pixels = lit(&fb);
        // 5x3 的边框，中间一行只有两端
        assert_eq!(pixels.len(), 5 + 5 + 2);
        assert!(pixels.contains(&(2, 3)));
        assert!(pixels.contains(&(6, 5)));
        assert!(!pixels.contains(&(4, 4)));
    }

    #[test]
    fn oversized_rectangles_are_rejected_not_clamped() {
        let mut fb = blank();

        assert_eq!(rectangle(&mut fb, 120, 0, 8, 4, Color::White), Err(GraphicsError::OutOfBounds));
        assert_eq!(
            filled_rectangle(&mut fb, 0, 60, 4, 4, Color::White),
            Err(GraphicsError::OutOfBounds)
        );
        assert_eq!(
            filled_rectangle(&mut fb, 0, 0, -1, 4, Color::White),
            Err(GraphicsError::InvalidParams)
        );
        assert!(lit(&fb).is_empty());

        // 恰好贴边可以绘制
        filled_rectangle(&mut fb, 120, 56, 7, 7, Color::White).unwrap();
        assert_eq!(lit(&fb).len(), 64);
    }

    #[test]
    fn filled_rectangle_is_a_strict_superset_of_its_outline() {
        let mut outline = blank();
        let mut filled = blank();
        rectangle(&mut outline, 10, 10, 6, 4, Color::White).unwrap();
        filled_rectangle(&mut filled, 10, 10, 6, 4, Color::White).unwrap();

        let (outline, filled) = (lit(&outline), lit(&filled));
        assert!(filled.is_superset(&outline));
        assert!(filled.len() > outline.len());
        assert_eq!(filled.len(), 7 * 5);
    }

    #[test]
    fn filled_triangle_is_a_strict_superset_of_its_outline() {
        let mut outline = blank();
        let mut filled = blank();
        triangle(&mut outline, 10, 10, 40, 10, 25, 40, Color::White).unwrap();
        filled_triangle(&mut filled, 10, 10, 40, 10, 25, 40, Color::White).unwrap();

        let (outline, filled) = (lit(&outline), lit(&filled));
        assert!(filled.is_superset(&outline));
        assert!(filled.len() > outline.len());
        assert!(filled.contains(&(25, 20)));
        assert!(!filled.contains(&(11, 30)));
    }

    #[test]
    fn triangle_with_a_vertex_off_screen_is_rejected() {
        let mut fb = blank();

        assert_eq!(
            filled_triangle(&mut fb, 0, 0, 10, 0, 5, 64, Color::White),
            Err(GraphicsError::OutOfBounds)
        );
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn circle_is_symmetric_about_its_center() {
        let (x0, y0) = (60, 30);
        let mut fb = blank();
        circle(&mut fb, x0, y0, 20, Color::White).unwrap();

        let pixels = lit(&fb);
        assert!(!pixels.is_empty());
        for &(x, y) in &pixels {
            assert!(pixels.contains(&(2 * x0 - x, y)));
            assert!(pixels.contains(&(x, 2 * y0 - y)));
        }
        assert!(pixels.contains(&(x0, y0 - 20)));
        assert!(pixels.contains(&(x0 + 20, y0)));
        assert!(!pixels.contains(&(x0, y0)));
    }

    #[test]
    fn filled_circle_is_a_strict_superset_of_its_outline() {
        let mut outline = blank();
        let mut filled = blank();
        circle(&mut outline, 64, 32, 15, Color::White).unwrap();
        filled_circle(&mut filled, 64, 32, 15, Color::White).unwrap();

        let (outline, filled) = (lit(&outline), lit(&filled));
        assert!(filled.is_superset(&outline));
        assert!(filled.len() > outline.len());
        assert!(filled.contains(&(64, 32)));
    }

    #[test]
    fn circle_must_fit_entirely() {
        let mut fb = blank();

        assert_eq!(circle(&mut fb, 5, 30, 6, Color::White), Err(GraphicsError::OutOfBounds));
        assert_eq!(filled_circle(&mut fb, 64, 60, 4, Color::White), Err(GraphicsError::OutOfBounds));
        assert_eq!(circle(&mut fb, 64, 32, -1, Color::White), Err(GraphicsError::InvalidParams));
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn huge_radius_is_out_of_bounds() {
        let mut fb = blank();

        assert_eq!(circle(&mut fb, 0, 0, i32::MAX, Color::White), Err(GraphicsError::OutOfBounds));
        assert_eq!(
            filled_circle(&mut fb, 64, 32, i32::MAX, Color::White),
            Err(GraphicsError::OutOfBounds)
        );
        assert_eq!(
            circle(&mut fb, 64, 32, i32::MAX / 2 + 1, Color::White),
            Err(GraphicsError::OutOfBounds)
        );
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn black_shapes_clear_pixels() {
        let mut fb = blank();
        fb.fill(Color::White);
        filled_circle(&mut fb, 64, 32, 3, Color::Black).unwrap();

        assert_eq!(fb.get_pixel(64, 32), Some(Color::Black));
        assert_eq!(fb.get_pixel(0, 0), Some(Color::White));
    }

    #[test]
    fn bitmap_draws_only_set_bits() {
        let mut fb = blank();
        fb.set_pixel(1, 0, Color::White).unwrap();
        // 10 像素宽，每行 2 字节
        let bits = [0b1000_0000, 0b0100_0000, 0b0000_0001, 0b0000_0000];
        bitmap(&mut fb, 0, 0, &bits, 10, 2, Color::White).unwrap();

        let expected: BTreeSet<_> = [(0, 0), (1, 0), (9, 0), (7, 1)].into_iter().collect();
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn bitmap_validates_data_length_and_extent() {
        let mut fb = blank();
        let bits = [0xFF; 4];

        assert_eq!(bitmap(&mut fb, 0, 0, &bits, 16, 3, Color::White), Err(GraphicsError::InvalidParams));
        assert_eq!(bitmap(&mut fb, 120, 0, &bits, 16, 2, Color::White), Err(GraphicsError::OutOfBounds));
        assert!(lit(&fb).is_empty());
    }
}
