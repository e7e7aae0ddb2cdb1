use clap::Parser;

/// Runtime configuration, parsed from the command line.
#[derive(Debug, Clone, Parser)]
#[command(name = "life_engine", version, about = "Double-buffered Game of Life on a fixed square grid")]
pub struct Config {
    /// Side length N of the square grid
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub grid_size: u32,

    /// Pixel size of one cell on screen
    #[arg(long, default_value_t = 60.0, value_parser = parse_positive)]
    pub cell_size: f32,

    /// Worker threads for generation advance (default: one per core)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: Option<u16>,

    /// Cap continuous play at this rate; unset advances once per frame
    #[arg(long, value_parser = parse_positive)]
    pub generations_per_second: Option<f32>,

    /// Log filter directive, overridden by RUST_LOG when set
    #[arg(long, default_value = "info")]
    pub log: String,

    /// Start from a randomly seeded grid instead of an empty one
    #[arg(long)]
    pub seed_random: bool,
}

impl Config {
    pub const fn grid_size(&self) -> usize {
        self.grid_size as usize
    }

    pub fn threads(&self) -> Option<usize> {
        self.threads.map(usize::from)
    }

    /// Window side in pixels: `grid_size * cell_size`
    pub fn window_size(&self) -> f32 {
        self.grid_size as f32 * self.cell_size
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: 10,
            cell_size: 60.0,
            threads: None,
            generations_per_second: None,
            log: "info".to_owned(),
            seed_random: false,
        }
    }
}

fn parse_positive(raw: &str) -> Result<f32, String> {
    let value: f32 = raw.parse().map_err(|e| format!("{raw:?} is not a number: {e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{raw:?} must be a positive number"))
    }
}
