//! Banner CLI.
//!
//! Thin plumbing around the compositing core: decode the input photo, cap
//! its long edge, resolve text/style/colors from flags plus preset or brand
//! lookup, render, encode. All policy lives in the `banner` and `presets`
//! crates; this binary only wires them to the filesystem.

mod config;
mod resize;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use image::Rgba;

use banner::{BannerConfig, Composer, PlacementStyle};
use presets::{Brand, DEFAULT_FILL, DEFAULT_TEXT, Preset, parse_rgba, sanitize_text};

const USAGE: &str = "usage: bannerbot INPUT OUTPUT [--text T] [--style S] [--preset N] \
[--brand B] [--width-pct P] [--opacity A] [--bg r,g,b,a] [--fg r,g,b,a] [--max-px N]";

#[derive(Debug, Default)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    text: Option<String>,
    style: Option<String>,
    preset: Option<u32>,
    brand: Option<String>,
    width_pct: Option<f32>,
    opacity: Option<u8>,
    bg: Option<String>,
    fg: Option<String>,
    max_px: Option<u32>,
}

impl CliArgs {
    fn parse(args: Vec<String>) -> Result<Self> {
        let mut parsed = Self::default();
        let mut positional = Vec::new();
        let mut iter = args.into_iter();

        while let Some(arg) = iter.next() {
            if !arg.starts_with("--") {
                positional.push(arg);
                continue;
            }
            let mut value = || {
                iter.next()
                    .with_context(|| format!("missing value for {arg}"))
            };
            match arg.as_str() {
                "--text" => parsed.text = Some(value()?),
                "--style" => parsed.style = Some(value()?),
                "--preset" => parsed.preset = Some(value()?.parse().context("--preset")?),
                "--brand" => parsed.brand = Some(value()?),
                "--width-pct" => parsed.width_pct = Some(value()?.parse().context("--width-pct")?),
                "--opacity" => parsed.opacity = Some(value()?.parse().context("--opacity")?),
                "--bg" => parsed.bg = Some(value()?),
                "--fg" => parsed.fg = Some(value()?),
                "--max-px" => parsed.max_px = Some(value()?.parse().context("--max-px")?),
                other => bail!("unknown flag {other}\n{USAGE}"),
            }
        }

        match positional.as_slice() {
            [input, output] => {
                parsed.input = PathBuf::from(input);
                parsed.output = PathBuf::from(output);
                Ok(parsed)
            }
            _ => bail!("{USAGE}"),
        }
    }
}

/// Resolve message, style and colors with the documented precedence:
/// explicit flag > brand > preset > hardcoded default.
fn resolve_banner_config(args: &CliArgs) -> Result<BannerConfig> {
    let brand = args
        .brand
        .as_deref()
        .map(|name| name.parse::<Brand>())
        .transpose()?;
    let preset = args.preset.map(Preset::from_index).transpose()?;

    let text = args
        .text
        .as_deref()
        .map(sanitize_text)
        .filter(|t| !t.is_empty())
        .or_else(|| brand.map(|b| b.label().to_string()))
        .or_else(|| preset.map(|p| p.label().to_string()))
        .unwrap_or_else(|| "PRICE DROP".to_string());

    let style_name = args
        .style
        .clone()
        .or_else(|| brand.map(|b| b.style_name().to_string()))
        .or_else(|| preset.map(|p| p.style_name().to_string()));
    let style = match style_name.as_deref() {
        Some(name) => name.parse::<PlacementStyle>()?,
        None => PlacementStyle::LeftStrip,
    };

    let default_fill = match brand {
        Some(b) => b.strip_color(),
        None => {
            let mut fill = DEFAULT_FILL;
            if let Some(opacity) = args.opacity {
                fill[3] = opacity;
            }
            fill
        }
    };
    let default_text = brand.map(|b| b.text_color()).unwrap_or(DEFAULT_TEXT);
    let fill = args
        .bg
        .as_deref()
        .map(|s| parse_rgba(s, default_fill))
        .unwrap_or(default_fill);
    let text_color = args
        .fg
        .as_deref()
        .map(|s| parse_rgba(s, default_text))
        .unwrap_or(default_text);

    let mut config = BannerConfig::new(text, style);
    config.fill = Rgba(fill);
    config.text_color = Rgba(text_color);
    config.width_ratio = args.width_pct.map(|pct| pct / 100.0);
    Ok(config)
}

fn main() -> Result<()> {
    // Structured logging. Use `RUST_LOG=info` etc.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse(std::env::args().skip(1).collect())?;
    let cfg = config::Config::load_or_default();

    let photo = image::open(&args.input)
        .with_context(|| format!("decode {:?}", args.input))?
        .to_rgba8();
    let photo = resize::resize_long_edge(photo, args.max_px.unwrap_or(cfg.max_long_edge))?;

    let banner_config = resolve_banner_config(&args)?;
    let composer = Composer::try_new(&cfg.font_paths)?;
    tracing::debug!(font = %composer.font_path().display(), "resolved font");

    let out = composer.render_banner(&photo, &banner_config)?;

    let is_png = args
        .output
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if is_png {
        out.save(&args.output)
            .with_context(|| format!("write {:?}", args.output))?;
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("create {:?}", args.output))?;
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
            BufWriter::new(file),
            cfg.jpeg_quality,
        );
        out.write_with_encoder(encoder)
            .with_context(|| format!("encode {:?}", args.output))?;
    }

    tracing::info!(
        width = out.width(),
        height = out.height(),
        output = %args.output.display(),
        "banner rendered"
    );
    Ok(())
}
