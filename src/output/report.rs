use crate::atmosphere::AtmosphereTable;
use crate::config::aircraft::AircraftSpec;
use crate::simulation::climb::ClimbSummary;
use std::fmt;

const REPORT_ALTITUDES: [f64; 3] = [0.0, 1500.0, 5000.0]; // m

impl fmt::Display for ClimbSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Outcome: {}", self.outcome)?;
        writeln!(
            f,
            "Total time: {:.2} s ({:.2} min), {} steps",
            self.total_time,
            self.total_time / 60.0,
            self.steps
        )?;
        writeln!(
            f,
            "Final altitude: {:.2} m (target {:.2} m)",
            self.final_altitude, self.target_altitude
        )?;
        writeln!(
            f,
            "Final velocity: {:.2} m/s ({:.2} km/h)",
            self.final_velocity,
            self.final_velocity * 3.6
        )?;
        writeln!(f, "Total fuel used: {:.2} kg", self.total_fuel)?;
        writeln!(
            f,
            "Distance covered: {:.2} m ({:.2} km)",
            self.total_distance,
            self.total_distance / 1000.0
        )?;
        writeln!(f, "Average climb rate: {:.2} m/s", self.average_climb_rate)?;
        writeln!(f, "Max velocity: {:.2} m/s", self.max_velocity)?;
        write!(f, "Max sampled climb rate: {:.2} m/s", self.max_climb_rate)
    }
}

pub struct AircraftReport<'a>(pub &'a AircraftSpec);

impl fmt::Display for AircraftReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let a = self.0;
        writeln!(f, "Aircraft: {}", a.name)?;
        writeln!(f, "Mass: {:.2} kg", a.mass)?;
        writeln!(f, "Wing area: {:.2} m²", a.wing_area)?;
        writeln!(f, "Cx = {:.3}, Cy = {:.3}", a.cx, a.cy)?;
        writeln!(
            f,
            "Max thrust: {:.2} N ({:.2} kN)",
            a.max_thrust,
            a.max_thrust / 1000.0
        )?;
        writeln!(
            f,
            "Specific consumption: {:.3} kg/(N·h)",
            a.specific_consumption
        )?;
        writeln!(
            f,
            "Max speed: {:.2} m/s ({:.2} km/h)",
            a.max_speed,
            a.max_speed * 3.6
        )?;
        writeln!(f, "Max altitude: {:.2} m", a.max_altitude)?;
        writeln!(f, "Fuel capacity: {:.2} kg", a.fuel_capacity)?;
        writeln!(f, "Wing loading: {:.2} kg/m²", a.wing_loading())?;
        write!(f, "Thrust-to-weight: {:.3}", a.thrust_to_weight())?;
        if a.can_take_off_vertically() {
            write!(f, " (vertical take-off capable)")
        } else {
            write!(f, " (take-off run required)")
        }
    }
}

pub struct AtmosphereReport<'a>(pub &'a AtmosphereTable);

impl fmt::Display for AtmosphereReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let table = self.0;
        let Ok((low, high)) = table.altitude_range() else {
            return write!(f, "Atmosphere table not loaded");
        };

        writeln!(f, "Samples: {}", table.len())?;
        write!(f, "Altitude range: {:.0} - {:.0} m", low, high)?;
        for altitude in REPORT_ALTITUDES {
            if let Ok(s) = table.sample_at(altitude) {
                write!(
                    f,
                    "\nAt {:.0} m: density = {:.3} kg/m³, pressure = {:.2} kPa, temperature = {:.2} K",
                    altitude,
                    s.density,
                    s.pressure / 1000.0,
                    s.temperature
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::samples::ATMOSPHERE_TABLE;

    #[test]
    fn atmosphere_report_lists_range_and_reference_altitudes() {
        let table = AtmosphereTable::from_reader(ATMOSPHERE_TABLE.as_bytes()).unwrap();
        let text = AtmosphereReport(&table).to_string();
        assert!(text.contains("Samples: 14"));
        assert!(text.contains("Altitude range: 0 - 10000 m"));
        assert!(text.contains("At 1500 m: density = 1.058 kg/m³"));
    }

    #[test]
    fn unloaded_atmosphere_report() {
        let table = AtmosphereTable::new();
        assert_eq!(
            AtmosphereReport(&table).to_string(),
            "Atmosphere table not loaded"
        );
    }

    #[test]
    fn aircraft_report_includes_derived_values() {
        let text = AircraftReport(&AircraftSpec::light_aircraft()).to_string();
        assert!(text.contains("Aircraft: Light aircraft"));
        assert!(text.contains("Wing loading: 296.77 kg/m²"));
        assert!(text.contains("take-off run required"));
    }
}
