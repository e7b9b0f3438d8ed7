//! Build a slide deck or PDF from a set of images.
//!
//! Usage:
//!   slidesmith photo1.jpg photo2.png --pptx deck.pptx
//!   slidesmith shots/*.jpg --layout fullscreen --pdf deck.pdf
//!   slidesmith img.jpg --content notes.json --no-points --pptx out.pptx
//!
//! `--content` points at a JSON map from file name to analyzed content:
//! `{ "photo1.jpg": { "title": "...", "points": ["..."] } }`. Images without
//! an entry fall back to positional titles at export time.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process;

use slidesmith::model::{LayoutPreset, Settings, Slide, SlideContent, SlideImage};
use slidesmith::{export_pdf, export_pptx};

struct CliConfig {
    images: Vec<PathBuf>,
    settings: Settings,
    content_path: Option<PathBuf>,
    pptx_out: Option<PathBuf>,
    pdf_out: Option<PathBuf>,
}

impl CliConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut images = Vec::new();
        let mut settings = Settings::default();
        let mut content_path = None;
        let mut pptx_out = None;
        let mut pdf_out = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--layout" => {
                    i += 1;
                    let value = args.get(i).ok_or("--layout needs a value")?;
                    settings.layout = value.parse::<LayoutPreset>()?;
                },
                "--no-title" => settings.include_title = false,
                "--no-points" => settings.include_points = false,
                "--content" => {
                    i += 1;
                    let value = args.get(i).ok_or("--content needs a path")?;
                    content_path = Some(PathBuf::from(value));
                },
                "--pptx" => {
                    i += 1;
                    let value = args.get(i).ok_or("--pptx needs a path")?;
                    pptx_out = Some(PathBuf::from(value));
                },
                "--pdf" => {
                    i += 1;
                    let value = args.get(i).ok_or("--pdf needs a path")?;
                    pdf_out = Some(PathBuf::from(value));
                },
                "--help" | "-h" => {
                    print_usage();
                    process::exit(0);
                },
                flag if flag.starts_with("--") => {
                    return Err(format!("unknown flag: {flag}"));
                },
                path => images.push(PathBuf::from(path)),
            }
            i += 1;
        }

        if images.is_empty() {
            return Err("no input images given".to_string());
        }
        if pptx_out.is_none() && pdf_out.is_none() {
            pptx_out = Some(PathBuf::from("deck.pptx"));
        }

        Ok(Self {
            images,
            settings,
            content_path,
            pptx_out,
            pdf_out,
        })
    }
}

fn print_usage() {
    println!(
        "Usage: slidesmith <images...> [--layout left|right|fullscreen] \
         [--no-title] [--no-points] [--content notes.json] \
         [--pptx out.pptx] [--pdf out.pdf]"
    );
}

fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

fn load_slides(config: &CliConfig) -> Result<Vec<Slide>, String> {
    let mut content_map: HashMap<String, SlideContent> = HashMap::new();
    if let Some(path) = &config.content_path {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        content_map = serde_json::from_str(&data)
            .map_err(|e| format!("invalid content file {}: {e}", path.display()))?;
    }

    let mut slides = Vec::with_capacity(config.images.len());
    for path in &config.images {
        let bytes =
            std::fs::read(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        let image = SlideImage::new(bytes, mime_for(path));
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let slide = match content_map.get(name) {
            Some(content) => Slide::with_content(image, content.clone()),
            None => Slide::new(image),
        };
        slides.push(slide);
    }
    Ok(slides)
}

fn run() -> Result<(), String> {
    let config = CliConfig::from_args()?;
    let slides = load_slides(&config)?;

    if let Some(path) = &config.pptx_out {
        let bytes = export_pptx(&slides, config.settings).map_err(|e| e.to_string())?;
        std::fs::write(path, bytes).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
        println!("wrote {}", path.display());
    }
    if let Some(path) = &config.pdf_out {
        let bytes = export_pdf(&slides, config.settings).map_err(|e| e.to_string())?;
        std::fs::write(path, bytes).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(message) = run() {
        eprintln!("error: {message}");
        process::exit(1);
    }
}
