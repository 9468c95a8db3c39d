//! Renders the sample gradient scenes to PNG files.

mod scenes;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use sheen_engine::logging::{LoggingConfig, init_logging};
use sheen_engine::paint::Pixmap;

use crate::scenes::{SCENES, Scene};

#[derive(Parser, Debug)]
#[command(about = "Render sample gradients to PNG", long_about = None)]
struct Args {
    /// Scene name to render, or `all`
    #[arg(long, short, default_value = "all")]
    scene: String,
    #[arg(long, default_value_t = 256)]
    width: u32,
    #[arg(long, default_value_t = 256)]
    height: u32,
    /// Directory to write PNG files into
    #[arg(long, default_value_os_t = default_directory())]
    out_directory: PathBuf,
    /// Print the available scene names and exit
    #[arg(long, short)]
    list: bool,
    /// `env_logger` filter, e.g. `sheen_engine=trace`
    #[arg(long)]
    log_filter: Option<String>,
}

fn default_directory() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("outputs")
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match &args.log_filter {
        Some(filter) => LoggingConfig::with_filter(filter.as_str()),
        None => LoggingConfig::default(),
    });

    if args.list {
        for scene in SCENES {
            println!("{:<16} {}", scene.name, scene.description);
        }
        return Ok(());
    }

    let selected = select_scenes(&args.scene)?;
    let width = i32::try_from(args.width).context("width out of range")?;
    let height = i32::try_from(args.height).context("height out of range")?;

    fs::create_dir_all(&args.out_directory).with_context(|| {
        format!("creating output directory {}", args.out_directory.display())
    })?;

    for scene in selected {
        let pixmap = (scene.render)(width, height);
        let out_path = args.out_directory.join(format!("{}.png", scene.name));
        write_png(&pixmap, &out_path)?;
        log::info!("wrote {} ({width}x{height}) to {}", scene.name, out_path.display());
    }

    Ok(())
}

fn select_scenes(name: &str) -> Result<Vec<&'static Scene>> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(SCENES.iter().collect());
    }
    match SCENES.iter().find(|scene| scene.name.eq_ignore_ascii_case(name)) {
        Some(scene) => Ok(vec![scene]),
        None => bail!("unknown scene '{name}' (use --list to see the available scenes)"),
    }
}

fn write_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    let (width, height) = (pixmap.width() as u32, pixmap.height() as u32);
    let image = image::RgbaImage::from_raw(width, height, pixmap.as_bytes().to_vec())
        .context("pixmap buffer does not match its dimensions")?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_returns_every_scene() {
        assert_eq!(select_scenes("ALL").unwrap().len(), SCENES.len());
    }

    #[test]
    fn select_by_name_is_case_insensitive() {
        let picked = select_scenes("Conic-Wheel").unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].name, "conic-wheel");
    }

    #[test]
    fn unknown_scene_is_an_error() {
        let err = select_scenes("nope").unwrap_err();
        assert!(err.to_string().contains("unknown scene"));
    }

    #[test]
    fn args_parse_defaults() {
        let args = Args::try_parse_from(["sheen-studio"]).unwrap();
        assert_eq!(args.scene, "all");
        assert_eq!((args.width, args.height), (256, 256));
        assert!(!args.list);
    }
}
