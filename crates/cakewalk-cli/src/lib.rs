use cakewalk_suite::Marker;
use clap::ValueEnum;

pub mod commands;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
        }
    }
}

/// Marker filter as a CLI value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum MarkerArg {
    Sanity,
    Regression,
}

impl From<MarkerArg> for Marker {
    fn from(arg: MarkerArg) -> Self {
        match arg {
            MarkerArg::Sanity => Marker::Sanity,
            MarkerArg::Regression => Marker::Regression,
        }
    }
}
