//! FFI bindings to dume-metrics.
//!
//! Text crosses the boundary as a pointer and a length in bytes.
//! Invalid UTF-8 is replaced, one U+FFFD per bad sequence, before
//! ordinals are counted. A NUL byte ends the text early.

#![allow(clippy::missing_safety_doc)]

use std::borrow::Cow;

use fontdue::{Font, FontSettings};
use glam::vec2;

use crate::{
    backend::FontdueMetrics,
    metrics::{GlyphMetricsSource, LineMetrics},
    rect::{Bounds, Rect},
    settings::{LayoutSettings, LineSpacing},
    text::TextMetrics,
};

/// A font at a fixed pixel size, ready to measure text.
pub struct DumeFont {
    font: Font,
    size: f32,
    settings: LayoutSettings,
}

impl DumeFont {
    fn with_metrics<R>(&self, f: impl FnOnce(TextMetrics<FontdueMetrics>) -> R) -> R {
        let metrics = FontdueMetrics::new(&self.font, self.size);
        f(TextMetrics::new(&metrics, &self.settings))
    }
}

/// Returns null if `data` is not a font.
#[no_mangle]
pub unsafe extern "C" fn dume_metrics_font_new(
    data: *const u8,
    data_len: usize,
    size: f32,
) -> *mut DumeFont {
    let data = bytes(data, data_len);
    let font = match Font::from_bytes(data, FontSettings::default()) {
        Ok(font) => font,
        Err(e) => {
            log::error!("Rejected font: {}", e);
            return std::ptr::null_mut();
        }
    };

    let font = DumeFont {
        font,
        size,
        settings: LayoutSettings::default(),
    };
    Box::leak(Box::new(font)) as *mut _
}

#[no_mangle]
pub unsafe extern "C" fn dume_metrics_font_free(font: *mut DumeFont) {
    if !font.is_null() {
        drop(Box::from_raw(font));
    }
}

#[no_mangle]
pub unsafe extern "C" fn dume_metrics_font_set_spacious(font: *mut DumeFont, spacious: bool) {
    unpointer(font).settings.line_spacing = if spacious {
        LineSpacing::Spacious
    } else {
        LineSpacing::Compact
    };
}

/// Ignored unless `c` is a valid Unicode scalar value.
#[no_mangle]
pub unsafe extern "C" fn dume_metrics_font_set_fallback_char(font: *mut DumeFont, c: u32) {
    match char::from_u32(c) {
        Some(c) => unpointer(font).settings.fallback_char = c,
        None => log::warn!("Ignoring invalid fallback character {:#x}", c),
    }
}

#[no_mangle]
pub unsafe extern "C" fn dume_metrics_line_height(font: *const DumeFont) -> f32 {
    (*font).with_metrics(|m| m.line_height())
}

/// Ascent, descent and line gap of the font at its size.
#[no_mangle]
pub unsafe extern "C" fn dume_metrics_line_metrics(font: *const DumeFont) -> LineMetrics {
    (*font).with_metrics(|m| m.source().line_metrics())
}

#[no_mangle]
pub unsafe extern "C" fn dume_metrics_advance_x(
    font: *const DumeFont,
    text: *const u8,
    text_len: usize,
) -> f32 {
    let text = string(text, text_len);
    (*font).with_metrics(|m| m.width(&text))
}

#[no_mangle]
pub unsafe extern "C" fn dume_metrics_text_bounds(
    font: *const DumeFont,
    text: *const u8,
    text_len: usize,
) -> Bounds {
    let text = string(text, text_len);
    (*font).with_metrics(|m| m.bounds(&text))
}

#[no_mangle]
pub unsafe extern "C" fn dume_metrics_index_for_position(
    font: *const DumeFont,
    text: *const u8,
    text_len: usize,
    x: f32,
    y: f32,
) -> usize {
    let text = string(text, text_len);
    (*font).with_metrics(|m| m.index_for_position(&text, vec2(x, y)))
}

#[no_mangle]
pub unsafe extern "C" fn dume_metrics_cursor_rect(
    font: *const DumeFont,
    text: *const u8,
    text_len: usize,
    cursor: usize,
) -> Rect {
    let text = string(text, text_len);
    (*font).with_metrics(|m| m.cursor_rect(&text, cursor))
}

/// Writes the highlight to `out` and returns `true`,
/// or returns `false` if there is nothing to draw.
#[no_mangle]
pub unsafe extern "C" fn dume_metrics_selection_rect(
    font: *const DumeFont,
    text: *const u8,
    text_len: usize,
    start: usize,
    end: usize,
    out: *mut Rect,
) -> bool {
    let text = string(text, text_len);
    match (*font).with_metrics(|m| m.selection_rect(&text, start, end)) {
        Some(rect) => {
            *out = rect;
            true
        }
        None => false,
    }
}

unsafe fn bytes<'a>(data: *const u8, len: usize) -> &'a [u8] {
    if data.is_null() || len == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(data, len)
    }
}

unsafe fn string<'a>(data: *const u8, len: usize) -> Cow<'a, str> {
    String::from_utf8_lossy(bytes(data, len))
}

fn unpointer<T>(p: *mut T) -> &'static mut T {
    unsafe { &mut *p }
}
