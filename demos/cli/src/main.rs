use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;

use isosurf::{
    field::{Sampling, ScalarField},
    mesh::{Mesh, Settings, Strategy, ThreadPool},
};

/// Samples a shape and extracts its isosurface
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Shape to sample
    #[clap(short, long, value_enum, default_value_t = Shape::Sphere)]
    shape: Shape,

    /// Number of samples along each axis
    #[clap(long, default_value_t = 64)]
    size: usize,

    /// Isovalue at which to extract the surface
    #[clap(long, default_value_t = 0.0, allow_hyphen_values = true)]
    iso: f32,

    /// Traversal strategy
    #[clap(long, value_enum, default_value_t = Mode::Scan)]
    strategy: Mode,

    /// Seed cube for surface tracking, as `i1,i2,i3`
    #[clap(long, value_delimiter = ',', num_args = 3)]
    seed: Option<Vec<usize>>,

    /// Skip normal estimation
    #[clap(long)]
    no_normals: bool,

    /// Swap the first and third axis of the output
    #[clap(long)]
    swap13: bool,

    /// Number of threads to use when scanning
    #[clap(short, long)]
    threads: Option<NonZeroUsize>,

    /// Number of times to extract (for benchmarking)
    #[clap(short = 'N', default_value_t = 1)]
    n: usize,

    /// Name of a `.stl` or `.obj` file to write
    #[clap(short, long)]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone)]
enum Shape {
    /// Sphere of radius 0.6
    Sphere,
    /// Torus around axis 3
    Torus,
    /// Two disjoint spheres
    Spheres,
    /// Gyroid lattice, filling the whole volume
    Gyroid,
}

#[derive(ValueEnum, Copy, Clone)]
enum Mode {
    Scan,
    Track,
    TrackAll,
}

impl Shape {
    /// Evaluates the shape's distance-like function at a point
    fn eval(self, [x, y, z]: [f32; 3]) -> f32 {
        let length = |v: [f32; 3]| v.iter().map(|v| v * v).sum::<f32>().sqrt();
        match self {
            Shape::Sphere => length([x, y, z]) - 0.6,
            Shape::Torus => {
                let r = (x * x + y * y).sqrt() - 0.6;
                (r * r + z * z).sqrt() - 0.25
            }
            Shape::Spheres => {
                let a = length([x + 0.45, y + 0.45, z + 0.45]) - 0.4;
                let b = length([x - 0.4, y - 0.4, z - 0.4]) - 0.5;
                a.min(b)
            }
            Shape::Gyroid => {
                let [x, y, z] = [x, y, z].map(|v| v * std::f32::consts::TAU);
                x.sin() * y.cos() + y.sin() * z.cos() + z.sin() * x.cos()
            }
        }
    }
}

/// Samples the shape on a grid spanning `[-1, 1]` on every axis
fn build_field(shape: Shape, size: usize) -> Result<ScalarField> {
    if size < 2 {
        bail!("grid size must be at least 2");
    }
    let s = Sampling::new(size, 2.0 / (size - 1) as f64, -1.0);
    let field = ScalarField::from_fn([s; 3], |i1, i2, i3| {
        let p = [i1, i2, i3].map(|i| s.value(i as f64) as f32);
        shape.eval(p)
    })?;
    Ok(field)
}

fn run_mesh(field: &ScalarField, args: &Args) -> Result<Mesh> {
    let strategy = match args.strategy {
        Mode::Scan => Strategy::Scan,
        Mode::Track => {
            let seed = match &args.seed {
                Some(s) => match s.as_slice() {
                    &[i1, i2, i3] => Some([i1, i2, i3]),
                    _ => bail!("seed must have three components"),
                },
                None => None,
            };
            Strategy::Track { seed }
        }
        Mode::TrackAll => Strategy::TrackAll,
    };
    let pool = args
        .threads
        .map(|n| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(n.get())
                .build()
                .map(ThreadPool::Custom)
        })
        .transpose()?;
    let settings = Settings {
        normals: !args.no_normals,
        swap13: args.swap13,
        threads: pool.as_ref(),
        ..Default::default()
    };

    let mut mesh = Mesh::new();
    for _ in 0..args.n {
        mesh = isosurf::mesh::extract(field, args.iso, strategy, &settings);
    }
    Ok(mesh)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let args = Args::parse();

    let now = Instant::now();
    let field = build_field(args.shape, args.size)?;
    info!("Built field in {:?}", now.elapsed());

    let start = Instant::now();
    let mesh = run_mesh(&field, &args)?;
    info!(
        "Extracted {}x at {:?} ms/iter",
        args.n,
        start.elapsed().as_micros() as f64 / 1000.0 / (args.n as f64)
    );
    info!(
        "Mesh has {} vertices and {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    if let Some(out) = args.out {
        let mut f = std::fs::File::create(&out)?;
        if out.extension().is_some_and(|e| e == "obj") {
            info!("Writing OBJ to {out:?}");
            mesh.write_obj(&mut f)?;
        } else {
            info!("Writing STL to {out:?}");
            mesh.write_stl(&mut f)?;
        }
    }

    Ok(())
}
