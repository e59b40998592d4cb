use clap::{Parser, ValueEnum};
use log::LevelFilter;
use raykernel::Vec3;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Parse a vector written as `x,y,z`.
pub fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected three comma-separated numbers, got '{}'", s));
    }
    let mut e = [0.0; 3];
    for (slot, part) in e.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|err| format!("invalid component '{}': {}", part, err))?;
    }
    Ok(Vec3::from_array(e))
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "raykernel")]
#[command(about = "Cast probe rays against a demo sphere scene")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Seed for the scene jitter and batch ray directions
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Probe ray origin as x,y,z
    #[arg(long, default_value = "1,1,1", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub origin: Vec3,

    /// Probe ray direction as x,y,z
    #[arg(long, default_value = "1,7,8", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub direction: Vec3,

    /// Lower bound of the accepted ray parameter range (exclusive)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub t_min: f64,

    /// Upper bound of the accepted ray parameter range (exclusive)
    #[arg(long, default_value_t = f64::INFINITY, allow_hyphen_values = true)]
    pub t_max: f64,

    /// Number of random rays to cast in parallel from the probe origin
    #[arg(long, short = 'b', default_value_t = 0)]
    pub batch: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vectors() {
        assert_eq!(parse_vec3("1,7,8"), Ok(Vec3::new(1.0, 7.0, 8.0)));
        assert_eq!(parse_vec3(" -1.5, 0 ,2e1"), Ok(Vec3::new(-1.5, 0.0, 20.0)));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,2,x").is_err());
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["raykernel"]);
        assert_eq!(args.origin, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(args.direction, Vec3::new(1.0, 7.0, 8.0));
        assert_eq!(args.t_min, 0.0);
        assert_eq!(args.t_max, f64::INFINITY);
        assert_eq!(args.batch, 0);
    }

    #[test]
    fn overrides() {
        let args = Args::parse_from([
            "raykernel",
            "--origin",
            "-2,0,0",
            "--t-max",
            "10",
            "--batch",
            "32",
            "--debug-level",
            "trace",
        ]);
        assert_eq!(args.origin, Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(args.t_max, 10.0);
        assert_eq!(args.batch, 32);
        assert!(matches!(args.debug_level, LogLevel::Trace));
    }

    #[test]
    fn negative_bounds() {
        let args = Args::parse_from(["raykernel", "--t-min", "-5", "--t-max", "-1"]);
        assert_eq!(args.t_min, -5.0);
        assert_eq!(args.t_max, -1.0);
    }
}
