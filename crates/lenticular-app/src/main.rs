mod cli;
mod driver;

use std::path::{Path, PathBuf};

use lenticular_common::Result;
use lenticular_config::{
    save_config_to_path, toml_loader, validation, LenticularConfig, ReloadManager,
};
use lenticular_renderer::plane::plane_mesh_from_config;
use lenticular_renderer::LenticularScene;
use tracing_subscriber::EnvFilter;

use driver::{DriverOptions, TextureCatalog};

const DEFAULT_DIRECTIVE: &str = "lenticular=info";
const ASPECT: f32 = 16.0 / 9.0;

/// Load the config before logging exists; the outcome is reported once the
/// subscriber is installed.
///
/// A config that cannot be read or fails validation is replaced by the
/// defaults, the same policy `ReloadManager::start` applies under `--watch`.
fn load(path: Option<&Path>) -> (LenticularConfig, Option<String>) {
    let loaded = match path {
        Some(p) => toml_loader::load_from_path(p),
        None => toml_loader::load_default(),
    };
    match loaded.and_then(|config| validation::validate(&config).map(|()| config)) {
        Ok(config) => (config, None),
        Err(e) => (LenticularConfig::default(), Some(e.to_string())),
    }
}

fn init_logging(cli_directive: Option<&str>, config: &LenticularConfig) {
    let directive = cli_directive.unwrap_or_else(|| config.logging.level.directive());
    let filter = match directive.parse() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::new(DEFAULT_DIRECTIVE),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(args: cli::Args) -> Result<()> {
    let config_path = args.config.as_ref().map(PathBuf::from);
    let (config, problem) = load(config_path.as_deref());
    init_logging(args.log_level.as_deref(), &config);

    tracing::info!("Lenticular v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = config_path {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(problem) = problem {
        tracing::warn!("Config rejected, using defaults: {problem}");
    }
    if args.print_config {
        println!("{}", lenticular_config::config_to_json(&config)?);
        return Ok(());
    }
    if let Some(ref out) = args.write_config {
        save_config_to_path(&config, Path::new(out))?;
        tracing::info!("Config written to {out}");
        return Ok(());
    }

    let (config, config_rx) = if args.watch {
        let path = match config_path {
            Some(p) => p,
            None => toml_loader::default_config_path()?,
        };
        let (config, rx) = ReloadManager::start(path).await;
        (config, Some(rx))
    } else {
        (config, None)
    };

    let mut catalog = TextureCatalog::new();
    let mut scene = LenticularScene::from_config(&config, |set| catalog.resolve(set))?;
    tracing::info!(
        "Scene ready: {} slices ({} drawable), {} textures, {}",
        scene.slice_count(),
        scene.ready_count(),
        catalog.texture_count(),
        driver::describe(scene.params())
    );

    let mesh = plane_mesh_from_config(&config.plane);
    tracing::info!(
        "Slice mesh: {} vertices for up to {} divisions",
        mesh.len(),
        config.plane.max_divisions
    );

    let camera = config.camera.position.map(|c| c as f32);
    let options = DriverOptions {
        frames: args.frames,
        fps: args.fps,
        camera,
        aspect: ASPECT,
        pointer: [args.pointer_x, 0.0],
        script: driver::drag_script(args.drag_from, args.drag_to, args.frames),
        realtime: true,
    };
    let summary = driver::run(&mut scene, &mut catalog, options, config_rx).await?;

    tracing::info!(
        frames = summary.frames,
        rotation = summary.rotation,
        phase = ?summary.phase,
        settled_at = ?summary.settled_at,
        reloads = summary.reloads,
        "Run complete"
    );
    if scene.ready_count() < scene.slice_count() {
        tracing::warn!(
            "{} of {} slices were not drawn",
            scene.slice_count() - scene.ready_count(),
            scene.slice_count()
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = cli::parse();
    if let Err(e) = run(args).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[carousel]\nslice_count = 0\n").unwrap();

        let (config, problem) = load(Some(path.as_path()));
        assert_eq!(config, LenticularConfig::default());
        assert!(problem.unwrap().contains("carousel.slice_count"));
    }

    #[test]
    fn valid_config_is_used_as_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[carousel]\nslice_count = 5\n").unwrap();

        let (config, problem) = load(Some(path.as_path()));
        assert_eq!(config.carousel.slice_count, 5);
        assert!(problem.is_none());
    }

    #[test]
    fn missing_override_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, problem) = load(Some(dir.path().join("absent.toml").as_path()));
        assert_eq!(config, LenticularConfig::default());
        assert!(problem.is_some());
    }
}
