//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::io;

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use wordzip::bitstream::bit_number::{number_as_sequence_of_bits, sequence_of_bits_as_number};
use wordzip::compression::{compress::compress, decompress::decompress};
use wordzip::tools::cli::{wzopts_init, Mode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace. The real level is set
    // from the command line. Logs go to stderr, stdout may carry data.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let options = wzopts_init();

    //----- Figure how what we need to do and go do it
    let result = match &options.op_mode {
        Mode::Zip => compress(&options),
        Mode::Unzip => decompress(&options),
        Mode::Number(bits) => sequence_of_bits_as_number(bits)
            .map(|number| println!("{}", number))
            .map_err(io::Error::from),
        Mode::Bits(number) => number_as_sequence_of_bits(number)
            .map(|bits| println!("{}", bits))
            .map_err(io::Error::from),
    };

    match &result {
        Ok(()) => info!("Done."),
        Err(e) => error!("{}", e),
    }
    result
}
