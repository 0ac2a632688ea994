use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "parcel-rater")]
#[command(about = "Calculates the delivery cost of a parcel from its weight and dimensions")]
pub struct CliConfig {
    #[arg(long, help = "Parcel weight in kilograms")]
    pub weight: Option<f64>,

    #[arg(long, help = "Parcel height in centimetres")]
    pub height: Option<f64>,

    #[arg(long, help = "Parcel width in centimetres")]
    pub width: Option<f64>,

    #[arg(long, help = "Parcel depth in centimetres")]
    pub depth: Option<f64>,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// All four measurements, when they were all given on the command
    /// line. Anything less falls back to interactive prompting.
    pub fn measurements(&self) -> Option<(f64, f64, f64, f64)> {
        match (self.weight, self.height, self.width, self.depth) {
            (Some(weight), Some(height), Some(width), Some(depth)) => {
                Some((weight, height, width, depth))
            }
            _ => None,
        }
    }
}
