//! Demo binary: builds a chunked pillar planet and reports mesh totals.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p aster-demo -- --world-size 128 --seed 7`.

mod config;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use aster_cubesphere::CubeFace;
use aster_mesh::compute_normals;
use aster_planet::{PlanetBuilder, World};

use crate::config::{CliArgs, Config};

/// Initialize console logging: `RUST_LOG` wins, then the configured level.
fn init_logging(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

fn run(args: &CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(args);

    init_logging(&config.debug.log_level);
    info!(
        "Building world: size {}, seed {}, parallel {}",
        config.world.world_size, config.world.seed, config.build.parallel
    );

    let mut world = World::new(config.world.world_size, config.world.seed)?;
    let builder = if config.build.threads == 0 {
        PlanetBuilder::new()
    } else {
        PlanetBuilder::with_thread_count(config.build.threads)
    };

    let start = Instant::now();
    let stats = builder.build_planet(&mut world, config.build.parallel)?;
    info!(
        "Built {} chunks ({} vertices, {} triangles) in {:.1?} on {} worker(s)",
        stats.chunks,
        stats.vertices,
        stats.triangles,
        start.elapsed(),
        if config.build.parallel {
            builder.thread_count()
        } else {
            1
        }
    );

    // Exercise the display-side recompute path on one chunk.
    let face = world.face_mut(CubeFace::PosY);
    if let Some(mesh) = face.chunk(0, 0).mesh() {
        let normals = compute_normals(mesh);
        face.chunk_mut(0, 0).mark_normals_clean();
        info!(
            "Recomputed {} normals for chunk (0, 0) of {:?}",
            normals.len(),
            CubeFace::PosY
        );
    }

    Ok(())
}

fn main() {
    let args = CliArgs::parse();
    if let Err(err) = run(&args) {
        eprintln!("aster-demo: {err}");
        std::process::exit(1);
    }
}
