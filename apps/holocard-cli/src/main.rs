use anyhow::Context;
use clap::{Parser, Subcommand};
use glam::Vec2;
use holocard_config::HolocardConfig;
use holocard_motion::CardMotion;
use holocard_render::{DebugTextRenderer, RenderView, Renderer};
use holocard_scene::Showcase;
use holocard_tools::{MotionReport, SceneInspector, StaticExport};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "holocard-cli", about = "CLI tool for the 3D card widget")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (YAML); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Build the showcase scene and print it
    Scene {
        /// Star field seed for a reproducible layout
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the scene as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run the card motion headless and report its state
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "120")]
        frames: u32,
        /// Frame rate of the simulated display
        #[arg(long, default_value = "60")]
        fps: f64,
        /// Pointer position normalized to [-1, 1], e.g. --pointer 0.5,-0.25
        #[arg(short, long, value_parser = parse_pointer, default_value = "0,0")]
        pointer: Vec2,
        /// Keep the pointer over the card
        #[arg(long)]
        hover: bool,
        /// Print a report every N frames (0 = only at the end)
        #[arg(long, default_value = "0")]
        every: u32,
    },
    /// Create or check configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Write the static bundle (images, scene, manifest)
    Export {
        /// Output directory, overrides the configuration
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// URL base path, overrides the configuration
        #[arg(long)]
        base_path: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration to a file
    Init {
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Load and validate a configuration file
    Check { path: PathBuf },
}

fn parse_pointer(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x {x:?}: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y {y:?}: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(config = ?cli.config, "holocard-cli starting");

    match cli.command {
        Commands::Info => {
            println!("holocard-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("scene: {}", holocard_scene::crate_info());
            println!("motion: {}", holocard_motion::crate_info());
            println!("render: {}", holocard_render::crate_info());
            println!("config: {}", holocard_config::crate_info());
            println!("tools: {}", holocard_tools::crate_info());
        }
        Commands::Scene { seed, json } => {
            let mut config = HolocardConfig::load_or_default(cli.config.as_deref())?;
            if seed.is_some() {
                config.scene.stars.seed = seed;
            }
            let showcase = Showcase::build(&config.scene);
            if json {
                println!("{}", serde_json::to_string_pretty(&showcase.scene)?);
            } else {
                let view = RenderView::from(&showcase.scene.camera);
                print!("{}", DebugTextRenderer::new().render(&showcase.scene, &view));
                println!("{}", SceneInspector::summary(&showcase.scene));
            }
        }
        Commands::Simulate {
            frames,
            fps,
            pointer,
            hover,
            every,
        } => {
            anyhow::ensure!(fps > 0.0, "fps must be positive");
            let config = HolocardConfig::load_or_default(cli.config.as_deref())?;
            let mut showcase = Showcase::build(&config.scene);
            let mut motion = CardMotion::new(config.motion, config.scene.card.rest_pitch);
            motion.set_pointer(pointer);
            motion.set_hover(hover);

            println!(
                "Simulating {frames} frames at {fps} fps, pointer=({:.2}, {:.2}) hover={hover}",
                pointer.x, pointer.y
            );
            let dt = 1.0 / fps;
            for frame in 1..=frames {
                motion.advance(dt);
                if every > 0 && frame % every == 0 {
                    println!("[{frame:>5}] {}", MotionReport::capture(&motion));
                }
            }
            motion.apply(&mut showcase);

            let report = MotionReport::capture(&motion);
            println!("{report}");
            println!("settle error: {:.6}", report.settle_error());
            if let Some(info) = SceneInspector::inspect_node(&showcase.scene, showcase.card) {
                println!("{info}");
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Init { path, force } => {
                anyhow::ensure!(
                    force || !path.exists(),
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
                HolocardConfig::default().save(&path)?;
                println!("Wrote default configuration to {}", path.display());
            }
            ConfigAction::Check { path } => {
                let config = HolocardConfig::load(&path)
                    .with_context(|| format!("checking {}", path.display()))?;
                println!(
                    "{}: OK (base path {:?}, {} stars, msaa x{})",
                    path.display(),
                    config.export.base_path,
                    config.scene.stars.count,
                    config.render.msaa_samples
                );
            }
        },
        Commands::Export { out, base_path } => {
            let mut config = HolocardConfig::load_or_default(cli.config.as_deref())?;
            if let Some(base_path) = base_path {
                config.export.base_path = base_path;
            }
            let mut export = StaticExport::new(&config);
            if let Some(out) = out {
                export = export.with_out_dir(out);
            }
            let manifest = export.run()?;
            println!(
                "Exported {} assets to {} (base path {:?})",
                manifest.assets.len(),
                export.out_dir().display(),
                manifest.base_path
            );
            for asset in &manifest.assets {
                println!("  {} {} {}", &asset.sha256[..12], asset.url, asset.bytes);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn pointer_argument() {
        assert_eq!(parse_pointer("0.5,-0.25").unwrap(), Vec2::new(0.5, -0.25));
        assert_eq!(parse_pointer(" 1 , 0 ").unwrap(), Vec2::new(1.0, 0.0));
        assert!(parse_pointer("0.5").is_err());
        assert!(parse_pointer("a,b").is_err());
    }

    #[test]
    fn parses_export_overrides() {
        let cli = Cli::try_parse_from([
            "holocard-cli",
            "export",
            "--out",
            "dist",
            "--base-path",
            "/cards",
            "--config",
            "holocard.yaml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("holocard.yaml")));
        match cli.command {
            Commands::Export { out, base_path } => {
                assert_eq!(out, Some(PathBuf::from("dist")));
                assert_eq!(base_path.as_deref(), Some("/cards"));
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn parses_simulate_defaults() {
        let cli = Cli::try_parse_from(["holocard-cli", "simulate", "--hover"]).unwrap();
        match cli.command {
            Commands::Simulate {
                frames,
                pointer,
                hover,
                ..
            } => {
                assert_eq!(frames, 120);
                assert_eq!(pointer, Vec2::ZERO);
                assert!(hover);
            }
            _ => panic!("expected simulate"),
        }
    }
}
