//! Prints the metrics of a text run.
//!
//! Usage: `cargo run --example measure [FONT] [SIZE] [TEXT]`

use std::env;

use anyhow::{anyhow, Context as _};
use dume_metrics::{FontLibrary, LayoutSettings, TextMetrics};
use glam::vec2;
use simple_logger::SimpleLogger;

const DEFAULT_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/DejaVuSans.ttf");

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let mut args = env::args().skip(1);
    let font_path = args.next().unwrap_or_else(|| DEFAULT_FONT.to_owned());
    let size: f32 = match args.next() {
        Some(size) => size.parse().context("invalid font size")?,
        None => 24.,
    };
    let text = args.next().unwrap_or_else(|| "Hello, AVAWAY\nworld!".to_owned());

    let mut library = FontLibrary::new();
    let faces = library
        .load_font_file(&font_path)
        .with_context(|| format!("failed to load '{}'", font_path))?;
    let font = *faces
        .first()
        .ok_or_else(|| anyhow!("'{}' has no faces", font_path))?;
    if let Some(family) = library.family_name(font) {
        println!("family:      {}", family);
    }

    let settings = LayoutSettings::default();
    let source = library.metrics(font, size)?;
    let metrics = TextMetrics::new(&source, &settings);

    println!("line height: {}", metrics.line_height());
    println!("lines:       {}", metrics.line_count(&text));
    println!("width:       {}", metrics.width(&text));
    println!("bounds:      {:?}", metrics.bounds(&text).to_rect());

    let probe = vec2(metrics.width(&text) / 2., metrics.line_height() / 2.);
    let hit = metrics.hit_test(&text, probe);
    println!("hit at {:?}: {:?}", probe, hit);
    println!("caret:       {:?}", metrics.cursor_rect(&text, hit.index));
    for rect in metrics.selection_rects(&text, 0, hit.index + 3) {
        println!("selection:   {:?}", rect);
    }

    Ok(())
}
