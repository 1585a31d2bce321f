use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use super::container::write_container;
use crate::huffman_coding::coder::WordCoder;
use crate::tools::cli::{Output, WzOpts};
use crate::tools::freq_count::FreqCounter;
use crate::tools::words::{read_words, total_length};

/// Extension added to compressed files.
pub const EXTENSION: &str = "wz";

/// What one compression run produced. Used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Words in the input
    pub words: usize,
    /// Distinct words, i.e. entries in the code table
    pub distinct: usize,
    /// Characters of the words written with single separators
    pub text_len: usize,
    /// Length of the encoded bit string
    pub bits: usize,
    /// Bytes written to the output, table included
    pub bytes: usize,
}

/// Count, build the code, encode and write one compressed container.
pub fn compress_words<W: Write>(
    words: &[String],
    counter: &FreqCounter,
    out: &mut W,
) -> io::Result<Report> {
    let freqs = counter.count(words);
    let coder = WordCoder::from_freqs(&freqs)?;
    let bits = coder.compress(words)?;
    debug!(
        "Encoded {} words into {} bits, longest code {} bits",
        words.len(),
        bits.len(),
        coder.table().max_code_len()
    );
    let bytes = write_container(out, &freqs, &bits)?;
    Ok(Report {
        words: words.len(),
        distinct: freqs.len(),
        text_len: total_length(words),
        bits: bits.len(),
        bytes,
    })
}

/// Open the output file, refusing to replace an existing one unless forced.
pub(crate) fn create_output(path: &Path, force: bool) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    options.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            io::Error::new(
                e.kind(),
                format!("{} already exists, use -f to overwrite", path.display()),
            )
        } else {
            e
        }
    })
}

fn log_report(name: &str, report: &Report) {
    info!(
        "{}: {} words ({} distinct), {} characters -> {} bits, {} bytes written.",
        name, report.words, report.distinct, report.text_len, report.bits, report.bytes
    );
}

/// Compress the input files defined in opts. With no files, stdin is compressed to stdout.
pub fn compress(opts: &WzOpts) -> io::Result<()> {
    let counter = FreqCounter::new(opts.partitions);

    if opts.files.is_empty() {
        let words = read_words(io::stdin().lock())?;
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let report = compress_words(&words, &counter, &mut out)?;
        out.flush()?;
        log_report("stdin", &report);
        return Ok(());
    }

    for name in &opts.files {
        let words = read_words(BufReader::new(File::open(name)?))?;
        let report = match opts.output {
            Output::Stdout => {
                let stdout = io::stdout();
                let mut out = BufWriter::new(stdout.lock());
                let report = compress_words(&words, &counter, &mut out)?;
                out.flush()?;
                report
            }
            Output::File => {
                let target = format!("{}.{}", name, EXTENSION);
                let mut out = BufWriter::new(create_output(Path::new(&target), opts.force_overwrite)?);
                let report = compress_words(&words, &counter, &mut out)?;
                out.flush()?;
                info!("Wrote {}", target);
                report
            }
        };
        log_report(name, &report);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::container::read_container;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn compress_words_test() {
        let text = words("to be or not to be that is the question");
        let mut buf: Vec<u8> = Vec::new();
        let report = compress_words(&text, &FreqCounter::two_way(), &mut buf).unwrap();
        assert_eq!(report.words, 10);
        assert_eq!(report.distinct, 8);
        assert_eq!(report.text_len, 39);
        assert_eq!(report.bytes, buf.len());

        let c = read_container(&mut buf.as_slice()).unwrap();
        assert_eq!(c.bits.len(), report.bits);
        assert_eq!(c.freqs["to"], 2);
        assert_eq!(c.freqs["question"], 1);
    }

    #[test]
    fn one_distinct_word_fails() {
        let err = compress_words(&words("la la la"), &FreqCounter::two_way(), &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn output_is_not_replaced_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exists.wz");
        std::fs::write(&path, b"old").unwrap();
        let err = create_output(&path, false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert!(create_output(&path, true).is_ok());
        assert_eq!(std::fs::read(&path).unwrap(), Vec::<u8>::new());
    }
}
