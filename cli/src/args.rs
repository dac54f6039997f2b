use std::num::ParseFloatError;

use clap::{ArgAction, Parser, ValueEnum};
use nalgebra::Vector3;
use thiserror::Error;
use time::CalendarTimestamp;
use transforms::EarthRotationModel;

/// Positional fields, in the order they are given on the command line.
pub const FIELD_NAMES: [&str; 9] = [
    "year", "month", "day", "hour", "minute", "second", "eci_x_km", "eci_y_km", "eci_z_km",
];

pub const ARGUMENT_COUNT_MESSAGE: &str =
    "Number of arguments passed is not valid, recheck your command line statement";

#[derive(Debug, Error)]
pub enum CliErrors {
    #[error("{} (expected {}, found {found})", ARGUMENT_COUNT_MESSAGE, FIELD_NAMES.len())]
    ArgumentCount { found: usize },
    #[error("could not parse {field} '{value}' as a real number: {source}")]
    Parse {
        field: &'static str,
        value: String,
        source: ParseFloatError,
    },
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
    #[error("RonError: {0}")]
    Ron(#[from] ron::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ECEF x, y and z in km, one per line
    #[default]
    Lines,
    /// The full solution, including intermediate quantities, as RON
    Ron,
}

#[derive(Debug, Parser)]
#[command(version, about = "Convert an ECI position to ECEF at a UTC epoch", long_about = None)]
pub struct Cli {
    /// year month day hour minute second eci_x_km eci_y_km eci_z_km
    #[arg(value_name = "VALUE", num_args = 0.., allow_negative_numbers = true)]
    pub values: Vec<String>,
    /// Reproduce the older converter's numbers, and exit successfully on a wrong argument count
    #[arg(long)]
    pub legacy: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,
    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn model(&self) -> EarthRotationModel {
        if self.legacy {
            EarthRotationModel::Legacy
        } else {
            EarthRotationModel::Standard
        }
    }
}

/// A validated set of positional values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub epoch: CalendarTimestamp,
    pub r_eci: Vector3<f64>,
}

impl TryFrom<&[String]> for ConversionRequest {
    type Error = CliErrors;

    fn try_from(values: &[String]) -> Result<Self, CliErrors> {
        if values.len() != FIELD_NAMES.len() {
            return Err(CliErrors::ArgumentCount {
                found: values.len(),
            });
        }

        let mut parsed = [0.0; 9];
        for ((slot, value), field) in parsed.iter_mut().zip(values).zip(FIELD_NAMES) {
            *slot = value.trim().parse::<f64>().map_err(|source| CliErrors::Parse {
                field,
                value: value.clone(),
                source,
            })?;
        }

        let [year, month, day, hour, minute, second, x, y, z] = parsed;
        Ok(Self {
            epoch: CalendarTimestamp::new(year, month, day, hour, minute, second),
            r_eci: Vector3::new(x, y, z),
        })
    }
}
