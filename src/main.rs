use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use geoboard::board::Board;
use geoboard::config::{BoardConfig, ConfigError};
use geoboard::factory::ElementRegistry;
use geoboard::render::{RecordingRenderer, TraceRenderer};
use geoboard::scene::{Scene, SceneError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("failed to encode draw commands: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Build a board from a scene file and print the draw commands of one render pass.
#[derive(Parser, Debug)]
#[command(name = "geoboard", about = "Render a geometry scene to draw commands")]
struct Cli {
    /// Scene JSON file.
    scene: PathBuf,

    /// Theme name (`default` or `gui`).
    #[arg(long, env = "GEOBOARD_THEME")]
    theme: Option<String>,

    /// Angle radius in user units.
    #[arg(long, env = "GEOBOARD_ANGLE_RADIUS")]
    angle_radius: Option<f64>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    match run(&Cli::parse()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "geoboard failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let cfg = BoardConfig::from_values(cli.theme.as_deref(), cli.angle_radius)?;

    let json = std::fs::read_to_string(&cli.scene)
        .map_err(|source| CliError::Read { path: cli.scene.clone(), source })?;
    let scene = Scene::from_json(&json)?;

    let mut board = Board::new(cfg.options()?);
    scene.build(&mut board, &ElementRegistry::with_defaults())?;

    let mut renderer = (RecordingRenderer::new(), TraceRenderer);
    board.update_renderer(&mut renderer);
    let commands = renderer.0.take();
    tracing::info!(theme = %cfg.theme, commands = commands.len(), "render pass complete");

    let output = if cli.pretty {
        serde_json::to_string_pretty(&commands)?
    } else {
        serde_json::to_string(&commands)?
    };
    Ok(output)
}
