use clap::{Parser, Subcommand};
use climbsim::config::samples::write_sample_files;
use climbsim::constants::{DEFAULT_MAX_STEPS, DEFAULT_REPORT_INTERVAL, DEFAULT_TIME_STEP};
use climbsim::output::{write_trajectory_file, AircraftReport, AtmosphereReport};
use climbsim::{AircraftSpec, AtmosphereTable, ClimbIntegrator, ClimbParameters};
use log::{info, LevelFilter};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "climbsim")]
#[command(about = "Aircraft climb trajectory calculator")]
struct Cli {
    #[clap(subcommand)]
    mode: ModeSelect,
}

#[derive(Subcommand, Debug)]
enum ModeSelect {
    #[command(about = "simulate a climb and print the sampled trajectory")]
    Run(RunCli),

    #[command(about = "print aircraft characteristics and atmosphere table info")]
    Info(InputFiles),

    #[command(about = "write the reference aircraft and atmosphere files")]
    Init {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Parser, Debug)]
struct InputFiles {
    #[arg(long, default_value = "aircraft_params.txt")]
    aircraft: PathBuf,
    #[arg(long, default_value = "atmosphere.csv")]
    atmosphere: PathBuf,
}

#[derive(Parser, Debug)]
struct RunCli {
    #[command(flatten)]
    inputs: InputFiles,
    #[arg(long, default_value_t = 500.0)]
    initial_altitude: f64,
    #[arg(long, default_value_t = 5000.0)]
    target_altitude: f64,
    #[arg(long, default_value_t = 100.0)]
    initial_velocity: f64,
    #[arg(long, default_value_t = 15.0)]
    climb_angle: f64,
    #[arg(long, default_value_t = DEFAULT_TIME_STEP)]
    dt: f64,
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,
    #[arg(long, default_value_t = DEFAULT_REPORT_INTERVAL)]
    report_interval: f64,
    /// Also write the sampled trajectory as CSV
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match cli.mode {
        ModeSelect::Run(args) => run(args),
        ModeSelect::Info(inputs) => info(inputs),
        ModeSelect::Init { dir } => {
            let (aircraft, atmosphere) = write_sample_files(&dir)?;
            println!("Created {} and {}", aircraft.display(), atmosphere.display());
            Ok(())
        }
    }
}

fn info(inputs: InputFiles) -> Result<(), Box<dyn Error>> {
    let aircraft = AircraftSpec::from_path(&inputs.aircraft)?;
    let atmosphere = AtmosphereTable::from_path(&inputs.atmosphere)?;

    println!("{}\n", AircraftReport(&aircraft));
    println!("{}", AtmosphereReport(&atmosphere));
    Ok(())
}

fn run(args: RunCli) -> Result<(), Box<dyn Error>> {
    let aircraft = AircraftSpec::from_path(&args.inputs.aircraft)?;
    let atmosphere = AtmosphereTable::from_path(&args.inputs.atmosphere)?;

    let params = ClimbParameters {
        initial_altitude: args.initial_altitude,
        target_altitude: args.target_altitude,
        initial_velocity: args.initial_velocity,
        climb_angle_degrees: args.climb_angle,
        dt: args.dt,
        max_steps: args.max_steps,
        report_interval: args.report_interval,
    };
    let integrator = ClimbIntegrator::new(&aircraft, &atmosphere, params)?;
    let params = integrator.parameters();
    info!(
        "Climbing {} from {:.0} m to {:.0} m (dt = {} s, at most {} steps)",
        aircraft.name, params.initial_altitude, params.target_altitude, params.dt, params.max_steps
    );
    let trajectory = integrator.run()?;

    println!("time,altitude,velocity,fuelUsed,distance");
    for s in &trajectory.samples {
        println!(
            "{:.2},{:.2},{:.2},{:.2},{:.2}",
            s.time, s.altitude, s.velocity, s.fuel_used, s.distance
        );
    }
    println!("\n{}", trajectory.summary);

    if let Some(path) = args.output {
        write_trajectory_file(&path, &trajectory.samples)?;
    }

    Ok(())
}
