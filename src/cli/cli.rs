use clap::{ArgEnum, Parser};

#[derive(Parser, Debug)]
#[clap(name = "rshape")]
#[clap(bin_name = "rshape")]
#[clap(version, about = "Compare the area of a square and a circle against a threshold", long_about = None)]
pub struct Cli {
    /// Which representation of the shapes answers the comparison
    #[clap(long, arg_enum, default_value = "trait")]
    pub dispatch: Dispatch,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[clap(short, long, parse(from_occurrences))]
    pub verbose: usize,
}

#[derive(ArgEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Virtual dispatch through the `Shape` trait
    Trait,
    /// Match over the `Shape` enum
    Enum,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
