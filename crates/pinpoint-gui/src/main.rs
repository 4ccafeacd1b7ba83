mod app;
mod convert;
mod panels;
mod state;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pinpoint", about = "Image and PDF coordinate viewer")]
#[command(version)]
struct Cli {
    /// Document to open at startup (.png/.jpg/.jpeg/.bmp or .pdf)
    file: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Pinpoint"),
        ..Default::default()
    };

    eframe::run_native(
        "Pinpoint",
        options,
        Box::new(move |cc| Ok(Box::new(app::PinpointApp::new(&cc.egui_ctx, cli.file)))),
    )
}
