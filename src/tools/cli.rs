use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

/// What the program was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Compress the input files
    Zip,
    /// Decompress the input files
    Unzip,
    /// Print the decimal number of a bit string
    Number(String),
    /// Print the bit string of a decimal number
    Bits(String),
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Zip => write!(f, "Zip"),
            Mode::Unzip => write!(f, "Unzip"),
            Mode::Number(_) => write!(f, "Number"),
            Mode::Bits(_) => write!(f, "Bits"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Define the two output channels
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WzOpts {
    /// Vec of names of files to read for input. Empty means stdin.
    pub files: Vec<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Compress/Decompress/Number/Bits
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Number of chunks the word counter splits its input into
    pub partitions: usize,
    /// Log level, 0 (off) to 5 (trace)
    pub verbose: u8,
}

impl WzOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            force_overwrite: false,
            op_mode: Mode::Zip,
            output: Output::File,
            partitions: rayon::current_num_threads(),
            verbose: 2,
        }
    }

    /// Put command line information from clap into our internal structure.
    pub fn from_args(args: Args) -> Self {
        let mut opts = Self::new();
        opts.files = args.files;
        opts.force_overwrite = args.force;
        if args.stdout {
            opts.output = Output::Stdout
        };
        if args.decompress {
            opts.op_mode = Mode::Unzip
        };
        if let Some(number) = args.to_bits {
            opts.op_mode = Mode::Bits(number)
        };
        if let Some(bits) = args.to_number {
            opts.op_mode = Mode::Number(bits)
        };
        if let Some(p) = args.partitions {
            opts.partitions = p.max(1)
        };
        opts.verbose = args.v;
        opts
    }
}

impl Default for WzOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Word level Huffman compressor",
    long_about = "
    Builds a Huffman code over the words of a text (split on whitespace) and stores
    the text as the concatenation of the word codes. The word counts are stored with
    the compressed data, so decompression rebuilds exactly the same code.

    Also converts bit strings to numbers and back without losing leading zeros."
)]
pub struct Args {
    /// Files to process (stdin/stdout when none are given)
    #[clap()]
    files: Vec<String>,

    /// Compress the input files (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Decompress the input files
    #[clap(short = 'd', long = "decompress", conflicts_with = "compress")]
    decompress: bool,

    /// Force overwriting output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Number of chunks to count words in (defaults to one per CPU)
    #[clap(short = 'p', long = "partitions")]
    partitions: Option<usize>,

    /// Print the number that stores the given bit string
    #[clap(long = "to-number", value_name = "BITS", conflicts_with = "to-bits")]
    to_number: Option<String>,

    /// Print the bit string stored in the given number
    #[clap(long = "to-bits", value_name = "NUMBER")]
    to_bits: Option<String>,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 2)]
    v: u8,
}

/// Map a verbosity number onto a log level filter.
pub fn level_filter(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Parse the command line, set the log level and report what we are going to do.
pub fn wzopts_init() -> WzOpts {
    let opts = WzOpts::from_args(Args::parse());

    // Set the log level
    log::set_max_level(level_filter(opts.verbose));

    info!("---- wordzip Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    if opts.files.is_empty() {
        warn!("No input files, reading from stdin");
    }
    for file in &opts.files {
        info!("Getting input from the file {}", file)
    }
    info!("Output goes to {}", opts.output);
    info!("Counting words in {} partitions", opts.partitions);
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- wordzip Initialization End ----");
    opts
}
