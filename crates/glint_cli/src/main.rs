//! glint: render Whitted ray traced images from scene files or presets.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use glint_core::{
    load_scene_file, Preset, ReflectionBlend, SceneFile, ShadowPolicy, MAX_DEPTH_LIMIT,
};
use glint_renderer::{render, render_parallel_with_buckets, save_image, DEFAULT_BUCKET_SIZE};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    FourSpheres,
    MirrorCorridor,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::FourSpheres => Preset::FourSpheres,
            PresetArg::MirrorCorridor => Preset::MirrorCorridor,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShadowArg {
    Black,
    AmbientOnly,
}

impl From<ShadowArg> for ShadowPolicy {
    fn from(arg: ShadowArg) -> Self {
        match arg {
            ShadowArg::Black => ShadowPolicy::Black,
            ShadowArg::AmbientOnly => ShadowPolicy::AmbientOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BlendArg {
    Mix,
    Additive,
}

impl From<BlendArg> for ReflectionBlend {
    fn from(arg: BlendArg) -> Self {
        match arg {
            BlendArg::Mix => ReflectionBlend::Mix,
            BlendArg::Additive => ReflectionBlend::Additive,
        }
    }
}

#[derive(Parser)]
#[command(name = "glint")]
#[command(version)]
#[command(about = "Recursive Whitted-style ray tracer")]
#[command(long_about = "
glint renders spheres and planes with Phong shading, hard shadows and
mirror reflections.

Example usage:
  glint render --preset four-spheres -o spheres.png
  glint render --scene scenes/corridor.json --max-depth 8 --threads 4
  glint check-scene scenes/corridor.json
")]
struct Cli {
    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene to an image
    Render(RenderArgs),

    /// List built-in scenes
    ListPresets,

    /// Validate a scene file without rendering
    CheckScene {
        /// Path to the JSON scene file
        path: PathBuf,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Path to a JSON scene file
    #[arg(short, long, conflicts_with = "preset")]
    scene: Option<PathBuf>,

    /// Render a built-in scene instead of a file
    #[arg(short, long)]
    preset: Option<PresetArg>,

    /// Output image (.png or .ppm)
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Override image width
    #[arg(long)]
    width: Option<u32>,

    /// Override image height
    #[arg(long)]
    height: Option<u32>,

    /// Override the reflection depth
    #[arg(long)]
    max_depth: Option<u32>,

    /// Override the shadow policy
    #[arg(long)]
    shadows: Option<ShadowArg>,

    /// Override the reflection blend
    #[arg(long)]
    blend: Option<BlendArg>,

    /// Worker threads (defaults to all cores)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Bucket edge length in pixels
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,

    /// Render on the calling thread only
    #[arg(long)]
    single_threaded: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    match cli.log_level {
        Some(level) => logger.filter_level(level.into()),
        None if std::env::var_os("RUST_LOG").is_none() => {
            logger.filter_level(log::LevelFilter::Info)
        }
        None => &mut logger,
    };
    logger.init();

    match cli.command {
        Commands::Render(args) => run_render(args),
        Commands::ListPresets => {
            list_presets();
            Ok(())
        }
        Commands::CheckScene { path } => check_scene(path),
    }
}

/// Load the scene and apply command-line overrides.
fn load(args: &RenderArgs) -> Result<SceneFile> {
    let mut file = match (&args.scene, args.preset) {
        (Some(path), _) => load_scene_file(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        (None, Some(preset)) => {
            let preset = Preset::from(preset);
            preset
                .build()
                .with_context(|| format!("Failed to build preset {}", preset.name()))?
        }
        (None, None) => bail!("Either --scene or --preset is required"),
    };

    if let Some(width) = args.width {
        file.width = width;
    }
    if let Some(height) = args.height {
        file.height = height;
    }
    if let Some(depth) = args.max_depth {
        file.settings.max_depth = depth;
    }
    if let Some(shadows) = args.shadows {
        file.settings.shadows = shadows.into();
    }
    if let Some(blend) = args.blend {
        file.settings.reflection_blend = blend.into();
    }

    file.validate().with_context(|| {
        format!("Invalid overrides (max depth is limited to {})", MAX_DEPTH_LIMIT)
    })?;
    Ok(file)
}

fn run_render(args: RenderArgs) -> Result<()> {
    let file = load(&args)?;
    log::info!(
        "Scene '{}': {} primitives, shadows {:?}, blend {:?}",
        file.scene.name,
        file.scene.primitive_count(),
        file.settings.shadows,
        file.settings.reflection_blend
    );

    let image = if args.single_threaded {
        render(&file.scene, &file.settings, file.width, file.height)?
    } else {
        let mut pool = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = args.threads {
            pool = pool.num_threads(threads);
        }
        let pool = pool.build().context("Failed to build render thread pool")?;
        pool.install(|| {
            render_parallel_with_buckets(
                &file.scene,
                &file.settings,
                file.width,
                file.height,
                args.bucket_size,
            )
        })?
    };

    save_image(&image, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    Ok(())
}

fn list_presets() {
    println!("Built-in scenes:");
    for preset in Preset::ALL {
        match preset.build() {
            Ok(file) => println!(
                "  {:<16} {}x{}, {} primitives, max depth {}",
                preset.name(),
                file.width,
                file.height,
                file.scene.primitive_count(),
                file.settings.max_depth
            ),
            Err(e) => println!("  {:<16} (invalid: {})", preset.name(), e),
        }
    }
}

fn check_scene(path: PathBuf) -> Result<()> {
    let file =
        load_scene_file(&path).with_context(|| format!("Invalid scene {}", path.display()))?;
    println!(
        "{}: OK ({} primitives, {} reflective, {}x{})",
        path.display(),
        file.scene.primitive_count(),
        file.scene.reflective_count(),
        file.width,
        file.height
    );
    Ok(())
}
