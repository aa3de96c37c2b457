//! safe-edit demo window: a column of edit-toggle fields

mod runtime;

use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use safe_edit::cli::{format_theme_list, CliArgs};
use safe_edit::config::AppConfig;
use safe_edit::config_paths::{latest_log_file, logs_dir};
use safe_edit::hover::hover_color;
use safe_edit::model::AppModel;
use safe_edit::theme::{list_available_themes, load_theme, Theme};
use safe_edit::view::{find_font, load_font};

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    safe_edit::tracing::init();
    if let Some(dir) = logs_dir() {
        tracing::debug!(path = %latest_log_file(&dir).display(), "logging to file");
    }

    if args.list_themes {
        println!("{}", format_theme_list(&list_available_themes()));
        return Ok(());
    }

    let config = args.apply_to(AppConfig::load());
    let theme = load_theme(&config.theme).unwrap_or_else(|e| {
        tracing::warn!("Failed to load theme '{}': {}, using default", config.theme, e);
        Theme::default()
    });

    if let Some(color) = &args.hover {
        let shade = hover_color(color, &theme)
            .with_context(|| format!("Cannot compute hover shade of '{}'", color))?;
        println!("{}", shade);
        return Ok(());
    }

    let font_path = find_font(config.font_path.as_deref())
        .context("No font found; set font_path in config.yaml or pass --font")?;
    let font = load_font(&font_path)?;
    tracing::info!(font = %font_path.display(), "font loaded");

    let model = AppModel::new(config, theme).context("Invalid field colors in configuration")?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(model, font);
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
