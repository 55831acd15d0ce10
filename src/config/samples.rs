use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const AIRCRAFT_FILE: &str = "aircraft_params.txt";
pub const ATMOSPHERE_FILE: &str = "atmosphere.csv";

pub const AIRCRAFT_PARAMS: &str = "# Light aircraft parameters
name=Light aircraft
mass=18400
wing_area=62
Cx=0.02
Cy=3.45
max_thrust=14500
specific_consumption=0.75
max_speed=280
max_altitude=8500
fuel_capacity=4500
";

pub const ATMOSPHERE_TABLE: &str = "altitude,density,pressure
0,1.225,101325
500,1.167,95461
1000,1.112,89880
1500,1.058,84556
2000,1.007,79500
2500,0.957,74690
3000,0.909,70108
4000,0.819,61640
5000,0.736,54020
6000,0.660,47181
7000,0.590,41061
8000,0.526,35600
9000,0.467,30743
10000,0.414,26436
";

/// Writes the reference aircraft and atmosphere files into `dir`.
pub fn write_sample_files<P: AsRef<Path>>(dir: P) -> io::Result<(PathBuf, PathBuf)> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let aircraft = dir.join(AIRCRAFT_FILE);
    fs::write(&aircraft, AIRCRAFT_PARAMS)?;
    let atmosphere = dir.join(ATMOSPHERE_FILE);
    fs::write(&atmosphere, ATMOSPHERE_TABLE)?;

    info!(
        "Sample files written: {} and {}",
        aircraft.display(),
        atmosphere.display()
    );
    Ok((aircraft, atmosphere))
}
