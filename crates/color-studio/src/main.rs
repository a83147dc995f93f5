use std::process::ExitCode;

use anyhow::Result;
use log::{error, info};

use color_studio::StudioConfig;
use color_studio::view::StudioView;
use studio_engine::logging::{init_logging, LoggingConfig};
use studio_engine::paint::Color;
use studio_ui::Application;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("color-studio: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = StudioConfig::from_env();
    let (font_path, font) = config.load_font()?;
    info!("using font {}", font_path.display());

    let mut studio = StudioView::new(config.fade);
    Application::new()
        .title(config.title)
        .size(config.size.0, config.size.1)
        .min_size(config.min_size.0, config.min_size.1)
        .font("body", font)
        .clear_color(Color::BLACK)
        .run(move |cx| studio.view(cx))
}
