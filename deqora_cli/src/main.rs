use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::warn;

use deqora_core::content::{self, WifiEncryption};
use deqora_core::{Ecl, FrameKind, ModuleMatrix, PatternKind, Rgb, StyleSpec};
use deqora_export as export;
use deqora_render::{AsciiArt, FrameComposer, Rasterizer, RgbImage};

mod encode;
mod palette;

#[derive(Parser)]
#[command(name = "deqora")]
#[command(version)]
#[command(propagate_version = true)]
#[command(about = "Generate styled QR codes from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    style: StyleArgs,

    #[arg(long, global = true, default_value = "Q", value_name = "LEVEL")]
    #[arg(help = "Error correction level: L, M, Q or H")]
    ecl: Ecl,

    #[arg(short, long, global = true, value_name = "FILE")]
    #[arg(help = "Output file, or an ASCII preview on stdout if omitted")]
    #[arg(long_help = "Output file, or an ASCII preview on stdout if omitted. \
        Passing a directory picks a timestamped PNG name inside it. Otherwise \
        the extension selects the format:\n\
        * .png: bitmap image\n\
        * .svg: vector art (squares and rounded patterns only)\n\
        * .txt: ASCII art")]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Encode free-form text")]
    Text {
        #[arg(help = "The text to encode")]
        content: String,
    },
    #[command(about = "Encode a web address")]
    Url {
        #[arg(help = "The address, including http:// or https://")]
        url: String,
    },
    #[command(about = "Encode Wi-Fi credentials that phones join on scan")]
    Wifi {
        #[arg(long, help = "Network name")]
        ssid: String,
        #[arg(long, default_value = "", help = "Network password")]
        password: String,
        #[arg(long, default_value = "wpa", help = "Authentication: wpa, wep or nopass")]
        encryption: WifiEncryption,
        #[arg(long, help = "Mark the network as hidden")]
        hidden: bool,
    },
    #[command(about = "Encode a WhatsApp chat link")]
    Whatsapp {
        #[arg(long, help = "Full number with country code, digits only")]
        phone: String,
        #[arg(long, help = "Message prefilled in the chat")]
        message: Option<String>,
    },
}

#[derive(Args)]
struct StyleArgs {
    #[arg(long, global = true, value_name = "HEX")]
    #[arg(help = "Module color as '#rrggbb', defaults to black or the palette's primary")]
    dark: Option<Rgb>,

    #[arg(long, global = true, value_name = "HEX")]
    #[arg(help = "Background color as '#rrggbb', defaults to white or the palette's secondary")]
    light: Option<Rgb>,

    #[arg(long, global = true, value_name = "HEX")]
    #[arg(help = "Frame decoration color, defaults to the module color")]
    accent: Option<Rgb>,

    #[arg(long, global = true, value_name = "NAME")]
    #[arg(help = "Module pattern: squares, rounded, circles, flowers, hearts or dots")]
    pattern: Option<String>,

    #[arg(long, global = true, value_name = "NAME")]
    #[arg(help = "Frame: none, scan_me_top, scan_me_bottom, simple_border, rounded_border, \
        camera_icon, smartphone_icon or elegant")]
    frame: Option<String>,

    #[arg(long, global = true, value_name = "NAME")]
    #[arg(help = "Start from a named palette; see --help for the list")]
    #[arg(long_help = "Start from a named palette: classic, ocean, forest, sunset, lavender, \
        fire, mint, royal or cherry. --dark and --light override its colors")]
    palette: Option<String>,

    #[arg(long, global = true, default_value = "medium", value_name = "SIZE")]
    #[arg(help = "Pixels per module: a number or small/medium/large/xlarge")]
    scale: String,
}

/// Kind of requested output.
enum Output {
    /// Print to stdout as ASCII art.
    Stdout,
    /// Write to a text file as ASCII art.
    Text(PathBuf),
    /// Write to an image file.
    Png(PathBuf),
    /// Write to a vector art file.
    Svg(PathBuf),
}

fn determine_output_kind(output: Option<&Path>, content_kind: &str) -> Result<Output> {
    let Some(path) = output else {
        return Ok(Output::Stdout);
    };
    if path.is_dir() {
        return Ok(Output::Png(
            path.join(export::suggested_filename(content_kind, "png")),
        ));
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") => Ok(Output::Text(path.to_path_buf())),
        Some("png") => Ok(Output::Png(path.to_path_buf())),
        Some("svg") => Ok(Output::Svg(path.to_path_buf())),
        Some(invalid) => Err(anyhow::Error::msg(format!(
            "invalid output extension '{}'",
            invalid
        ))),
        None => Err(anyhow::Error::msg("requested output has no extension")),
    }
}

/// Build the payload string and name its kind for default filenames.
fn build_payload(command: &Command) -> Result<(String, &'static str)> {
    match command {
        Command::Text { content } => Ok((content.clone(), "text")),
        Command::Url { url } => {
            content::validate_url(url)?;
            Ok((url.trim().to_string(), "url"))
        }
        Command::Wifi {
            ssid,
            password,
            encryption,
            hidden,
        } => Ok((content::wifi(ssid, password, *encryption, *hidden)?, "wifi")),
        Command::Whatsapp { phone, message } => Ok((
            content::whatsapp(phone, message.as_deref())?,
            "whatsapp",
        )),
    }
}

/// Turn the style flags into a spec and the frame accent color.
fn resolve_style(args: &StyleArgs) -> Result<(StyleSpec, Rgb)> {
    let palette = match args.palette.as_deref() {
        Some(name) => Some(palette::by_name(name).with_context(|| {
            format!(
                "unknown palette '{}': expected one of {}",
                name,
                palette::names()
            )
        })?),
        None => None,
    };
    let dark = args
        .dark
        .unwrap_or_else(|| palette.map_or(Rgb::BLACK, |p| p.primary));
    let light = args
        .light
        .unwrap_or_else(|| palette.map_or(Rgb::WHITE, |p| p.secondary));
    let accent = args.accent.unwrap_or(dark);
    let style = StyleSpec::new()
        .with_dark(dark)
        .with_light(light)
        .with_pattern(pattern_from(args.pattern.as_deref()))
        .with_frame(frame_from(args.frame.as_deref()))
        .with_scale(parse_scale(&args.scale)?);
    Ok((style, accent))
}

fn pattern_from(name: Option<&str>) -> PatternKind {
    let Some(name) = name else {
        return PatternKind::default();
    };
    let kind = PatternKind::from_name(name);
    if kind.name() != name {
        warn!("unknown pattern '{}', rendering '{}'", name, kind.name());
    }
    kind
}

fn frame_from(name: Option<&str>) -> FrameKind {
    let Some(name) = name else {
        return FrameKind::default();
    };
    let kind = FrameKind::from_name(name);
    if kind.name() != name {
        warn!("unknown frame '{}', rendering '{}'", name, kind.name());
    }
    kind
}

fn parse_scale(value: &str) -> Result<u32> {
    let scale = match value {
        "small" => 5,
        "medium" => 10,
        "large" => 15,
        "xlarge" => 20,
        number => number.parse().with_context(|| {
            format!(
                "invalid scale '{}': expected a number or small/medium/large/xlarge",
                number
            )
        })?,
    };
    anyhow::ensure!(scale >= 1, "scale must be at least 1");
    Ok(scale)
}

fn render_bitmap(matrix: &ModuleMatrix, style: &StyleSpec, accent: Rgb) -> RgbImage {
    let art = Rasterizer::with_style(style.clone()).rasterize(matrix);
    FrameComposer::new(style.frame, accent).compose(art)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let (content, content_kind) = build_payload(&cli.command)?;
    // Make sure the requested output is valid before rendering anything.
    let output = determine_output_kind(cli.output.as_deref(), content_kind)?;
    let (style, accent) = resolve_style(&cli.style)?;
    let matrix = encode::encode(&content, cli.ecl)
        .with_context(|| format!("could not encode {} bytes of content", content.len()))?;
    match output {
        Output::Stdout => {
            let stdout = std::io::stdout();
            AsciiArt::new()
                .with_quiet_zone(2)
                .render(&mut stdout.lock(), &matrix)?;
        }
        Output::Text(path) => {
            let file = File::create(&path)
                .with_context(|| format!("could not create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            AsciiArt::new().with_quiet_zone(2).render(&mut writer, &matrix)?;
            writer.flush()?;
        }
        Output::Png(path) => {
            export::write_png(&render_bitmap(&matrix, &style, accent), &path)
                .with_context(|| format!("could not write {}", path.display()))?;
        }
        Output::Svg(path) if style.pattern.vector_capable() => {
            if style.frame != FrameKind::None {
                warn!("frames are bitmap-only; the SVG contains the unframed code");
            }
            export::write_svg(&matrix, &style, &path)
                .with_context(|| format!("could not write {}", path.display()))?;
        }
        Output::Svg(path) => {
            // No vector form for this pattern; write the bitmap next to the
            // requested path instead of failing the whole run.
            let path = path.with_extension("png");
            warn!(
                "pattern '{}' has no vector form, writing {} instead",
                style.pattern.name(),
                path.display()
            );
            export::write_png(&render_bitmap(&matrix, &style, accent), &path)
                .with_context(|| format!("could not write {}", path.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_scale_names_and_numbers() {
        assert_eq!(parse_scale("small").unwrap(), 5);
        assert_eq!(parse_scale("medium").unwrap(), 10);
        assert_eq!(parse_scale("large").unwrap(), 15);
        assert_eq!(parse_scale("xlarge").unwrap(), 20);
        assert_eq!(parse_scale("7").unwrap(), 7);
        assert!(parse_scale("0").is_err());
        assert!(parse_scale("tiny").is_err());
    }

    #[test]
    fn test_output_kind_from_extension() {
        assert!(matches!(
            determine_output_kind(None, "text").unwrap(),
            Output::Stdout
        ));
        assert!(matches!(
            determine_output_kind(Some(Path::new("code.png")), "text").unwrap(),
            Output::Png(_)
        ));
        assert!(matches!(
            determine_output_kind(Some(Path::new("code.svg")), "text").unwrap(),
            Output::Svg(_)
        ));
        assert!(matches!(
            determine_output_kind(Some(Path::new("code.txt")), "text").unwrap(),
            Output::Text(_)
        ));
        assert!(determine_output_kind(Some(Path::new("code.bmp")), "text").is_err());
        assert!(determine_output_kind(Some(Path::new("code")), "text").is_err());
    }

    #[test]
    fn test_directory_output_gets_a_generated_name() {
        let output = determine_output_kind(Some(Path::new(".")), "wifi").unwrap();
        match output {
            Output::Png(path) => {
                let name = path.file_name().unwrap().to_string_lossy().into_owned();
                assert!(name.starts_with("qr_wifi_"));
                assert!(name.ends_with(".png"));
            }
            _ => panic!("expected a PNG output"),
        }
    }

    #[test]
    fn test_unknown_style_names_fall_back() {
        assert_eq!(pattern_from(Some("blobs")), PatternKind::Squares);
        assert_eq!(frame_from(Some("garland")), FrameKind::None);
        assert_eq!(pattern_from(Some("hearts")), PatternKind::Hearts);
        assert_eq!(frame_from(Some("elegant")), FrameKind::Elegant);
    }

    #[test]
    fn test_palette_feeds_default_colors() {
        let args = StyleArgs {
            dark: None,
            light: None,
            accent: None,
            pattern: None,
            frame: None,
            palette: Some("forest".to_string()),
            scale: "medium".to_string(),
        };
        let (style, accent) = resolve_style(&args).unwrap();
        assert_eq!(style.dark, Rgb(0x2d, 0x50, 0x16));
        assert_eq!(style.light, Rgb(0x7e, 0xc0, 0x9f));
        assert_eq!(accent, style.dark);
    }

    #[test]
    fn test_explicit_colors_override_the_palette() {
        let args = StyleArgs {
            dark: Some(Rgb::BLACK),
            light: None,
            accent: Some(Rgb(1, 2, 3)),
            pattern: None,
            frame: None,
            palette: Some("ocean".to_string()),
            scale: "4".to_string(),
        };
        let (style, accent) = resolve_style(&args).unwrap();
        assert_eq!(style.dark, Rgb::BLACK);
        assert_eq!(style.light, Rgb(0x00, 0xd4, 0xff));
        assert_eq!(accent, Rgb(1, 2, 3));
        assert_eq!(style.scale, 4);
    }

    #[test]
    fn test_unknown_palette_is_an_error() {
        let args = StyleArgs {
            dark: None,
            light: None,
            accent: None,
            pattern: None,
            frame: None,
            palette: Some("neon".to_string()),
            scale: "medium".to_string(),
        };
        assert!(resolve_style(&args).is_err());
    }
}
