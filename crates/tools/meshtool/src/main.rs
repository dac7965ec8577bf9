mod config;
mod obj;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::MeshtoolConfig;
use mesher::{BufferSink, GridWalker, MeshSink, TriangulationTables};
use obj::ObjSink;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "meshtool")]
#[command(about = "Voxel density field to triangle mesh converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the configured render volume and write the surface mesh
    Generate {
        /// TOML config with [mesher] and [field] sections. Defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output Wavefront OBJ file
        #[arg(short, long, default_value = "mesh.obj")]
        output: PathBuf,

        /// Also write flat vertex/index buffers as JSON
        #[arg(long)]
        buffers: Option<PathBuf>,

        /// Write generation counters as JSON
        #[arg(long)]
        stats: Option<PathBuf>,
    },

    /// Validate the built-in triangulation tables and print the class histogram
    Tables,

    /// Print the default configuration as TOML
    DefaultConfig,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            output,
            buffers,
            stats,
        } => {
            let config = match config {
                Some(path) => MeshtoolConfig::load(&path)?,
                None => MeshtoolConfig::default(),
            };
            generate(&config, &output, buffers.as_deref(), stats.as_deref())?;
        }
        Commands::Tables => tables()?,
        Commands::DefaultConfig => print!("{}", MeshtoolConfig::default().to_toml_string()?),
    }

    Ok(())
}

fn generate(
    config: &MeshtoolConfig,
    output: &Path,
    buffers: Option<&Path>,
    stats_path: Option<&Path>,
) -> Result<()> {
    tracing::info!(
        dimensions = ?config.mesher.dimensions,
        voxel_size = config.mesher.voxel_size,
        "generating mesh"
    );
    let field = config.field.build();
    let walker = GridWalker::new(config.mesher.clone())?;
    let generation = walker.walk(&*field)?;

    if let Some(path) = buffers {
        let mut sink = BufferSink::new();
        sink.accept(generation.mesh.clone())?;
        write_json(path, &sink.into_buffers())?;
        tracing::info!("wrote buffers to {}", path.display());
    }

    if let Some(path) = stats_path {
        write_json(path, &generation.stats)?;
    }

    let file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut sink = ObjSink::new(BufWriter::new(file));
    sink.accept(generation.mesh)?;
    sink.finish()?;

    tracing::info!(
        vertices = generation.stats.vertices_created,
        triangles = generation.stats.triangles,
        "wrote {}",
        output.display()
    );
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    Ok(())
}

fn tables() -> Result<()> {
    let tables = TriangulationTables::REGULAR;
    tables.validate()?;
    println!("regular cell tables OK");
    for (class, count) in tables.class_histogram().into_iter().enumerate() {
        let data = &tables.cell_data[class];
        println!(
            "class {class:2}: {count:3} cases, {} vertices, {} triangles",
            data.vertex_count(),
            data.triangle_count()
        );
    }
    Ok(())
}
