/// Shape a line of text with the fonts listed in rune.toml (or RUNE_FONTS)
/// and print the resulting runs.
///
/// Run with:
/// RUST_LOG=rune_shape=debug cargo run -p rune-shape --example shape_text -- "Hello שלום"
use anyhow::{Context, Result, bail};
use rune_config::RuneConfig;
use rune_shape::{FontCache, FontStyle, LayoutBuilder, PathCommand, ShapeParams};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = RuneConfig::load();
    if config.fonts.faces.is_empty() {
        bail!("no fonts configured; set [fonts] in rune.toml or RUNE_FONTS");
    }

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Hello, \u{05E9}\u{05DC}\u{05D5}\u{05DD}!".to_string());

    let mut cache = FontCache::new();
    let fonts = cache
        .load_faces(&config.fonts.faces)
        .context("loading configured fonts")?;

    let mut builder = LayoutBuilder::new(fonts)?;
    // Second half in bold italic to exercise style runs and synthesis.
    let middle = text
        .char_indices()
        .nth(text.chars().count() / 2)
        .map_or(text.len(), |(index, _)| index);
    let (head, tail) = text.split_at(middle);
    builder.append(head, FontStyle::default());
    builder.append(tail, FontStyle::bold_italic());
    if builder.has_missing_glyphs() {
        println!("warning: some characters are not covered by any configured font");
    }

    let layout = builder.build()?;
    let params = ShapeParams::from(&config.shaping);
    let glyph_runs = layout.shape(&params)?;

    println!("Text: {:?}", text);
    println!("Paragraph level: {}", layout.paragraph_base_level());
    println!();
    for glyph_run in &glyph_runs {
        let run = &glyph_run.font_run;
        let run_text: String = layout.text(run).iter().collect();
        println!(
            "run {:?} level={} script={:?} font={} bold={} slant={} text={:?}",
            run.range(),
            run.bidi_level,
            run.script,
            run.font_index,
            run.synthetic_bold,
            run.synthetic_slant,
            run_text
        );
        for glyph in &glyph_run.glyphs {
            let segments = glyph
                .path
                .iter()
                .filter(|command| !matches!(command, PathCommand::Close))
                .count();
            println!(
                "  glyph {:>5} advance=({}, {}) offset=({}, {}) segments={}",
                glyph.glyph_id,
                glyph.x_advance,
                glyph.y_advance,
                glyph.x_offset,
                glyph.y_offset,
                segments
            );
        }
    }
    Ok(())
}
