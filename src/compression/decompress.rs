use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::{debug, info, warn};

use super::compress::{create_output, EXTENSION};
use super::container::{read_container, read_next_container};
use crate::huffman_coding::coder::decode;
use crate::huffman_coding::huffman::build_tree;
use crate::tools::cli::{Output, WzOpts};

/// Read every container in `input`, rebuild each code and write each container's words
/// separated by single spaces, one line per container. Several files compressed to
/// stdout come back as several lines. Returns the number of words written.
pub fn decompress_stream<R: Read, W: Write>(input: &mut R, out: &mut W) -> io::Result<usize> {
    // An empty input is an error, not zero containers.
    let mut next = Some(read_container(input)?);
    let mut total = 0;
    let mut containers = 0;
    while let Some(container) = next {
        // Same counts, same tree: the builder breaks every tie the same way.
        let root = build_tree(&container.freqs)?;
        let words = decode(&root, &container.bits)?;
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                out.write_all(b" ")?;
            }
            out.write_all(word.as_bytes())?;
        }
        out.write_all(b"\n")?;
        total += words.len();
        containers += 1;
        next = read_next_container(input)?;
    }
    debug!("{} containers, {} words", containers, total);
    Ok(total)
}

/// Name of the decompressed file: "notes.txt.wz" becomes "notes.txt.out".
pub fn output_name(input: &str) -> String {
    let suffix = format!(".{}", EXTENSION);
    match input.strip_suffix(&suffix) {
        Some(stem) if !stem.is_empty() => format!("{}.out", stem),
        _ => {
            warn!("{} does not end in {}", input, suffix);
            format!("{}.out", input)
        }
    }
}

/// Decompress the files specified in opts. With no files, stdin is decompressed to stdout.
pub fn decompress(opts: &WzOpts) -> io::Result<()> {
    if opts.files.is_empty() {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let count = decompress_stream(&mut io::stdin().lock(), &mut out)?;
        out.flush()?;
        info!("stdin: {} words restored.", count);
        return Ok(());
    }

    for name in &opts.files {
        let mut input = BufReader::new(File::open(name)?);
        let count = match opts.output {
            Output::Stdout => {
                let stdout = io::stdout();
                let mut out = BufWriter::new(stdout.lock());
                let count = decompress_stream(&mut input, &mut out)?;
                out.flush()?;
                count
            }
            Output::File => {
                let target = output_name(name);
                let mut out = BufWriter::new(create_output(Path::new(&target), opts.force_overwrite)?);
                let count = decompress_stream(&mut input, &mut out)?;
                out.flush()?;
                info!("Wrote {}", target);
                count
            }
        };
        info!("{}: {} words restored.", name, count);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::compress::{compress, compress_words};
    use crate::tools::cli::Mode;
    use crate::tools::freq_count::FreqCounter;

    #[test]
    fn stream_round_trip() {
        let text: Vec<String> = "it was the best of times it was the worst of times"
            .split(' ')
            .map(str::to_string)
            .collect();
        let mut packed: Vec<u8> = Vec::new();
        compress_words(&text, &FreqCounter::new(4), &mut packed).unwrap();

        let mut restored: Vec<u8> = Vec::new();
        let count = decompress_stream(&mut packed.as_slice(), &mut restored).unwrap();
        assert_eq!(count, text.len());
        assert_eq!(String::from_utf8(restored).unwrap(), text.join(" ") + "\n");
    }

    #[test]
    fn concatenated_streams() {
        let first: Vec<String> = ["a", "b", "a"].iter().map(|s| s.to_string()).collect();
        let second: Vec<String> = ["x", "y", "z", "z"].iter().map(|s| s.to_string()).collect();
        let mut packed: Vec<u8> = Vec::new();
        compress_words(&first, &FreqCounter::two_way(), &mut packed).unwrap();
        compress_words(&second, &FreqCounter::two_way(), &mut packed).unwrap();

        let mut restored: Vec<u8> = Vec::new();
        let count = decompress_stream(&mut packed.as_slice(), &mut restored).unwrap();
        assert_eq!(count, 7);
        assert_eq!(String::from_utf8(restored).unwrap(), "a b a\nx y z z\n");
    }

    #[test]
    fn empty_stream() {
        let err = decompress_stream(&mut &b""[..], &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn output_name_test() {
        assert_eq!(output_name("notes.txt.wz"), "notes.txt.out");
        assert_eq!(output_name("notes.txt"), "notes.txt.out");
        assert_eq!(output_name(".wz"), ".wz.out");
    }

    #[test]
    fn corrupt_payload() {
        let text: Vec<String> = ["a", "b", "c", "a"].iter().map(|s| s.to_string()).collect();
        let mut packed: Vec<u8> = Vec::new();
        compress_words(&text, &FreqCounter::two_way(), &mut packed).unwrap();
        // Payload is the last byte; a lone sentinel decodes to an empty bit string.
        *packed.last_mut().unwrap() = 1;
        let err = decompress_stream(&mut packed.as_slice(), &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn files_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("poem.txt");
        std::fs::write(&source, "so much depends\nupon\n\na red wheel\nbarrow\n").unwrap();
        let source = source.to_string_lossy().to_string();

        let mut opts = WzOpts::new();
        opts.files = vec![source.clone()];
        compress(&opts).unwrap();
        // A second run must not silently replace the output.
        assert!(compress(&opts).is_err());

        opts.op_mode = Mode::Unzip;
        opts.files = vec![format!("{}.wz", source)];
        decompress(&opts).unwrap();
        let restored = std::fs::read_to_string(format!("{}.out", source)).unwrap();
        assert_eq!(restored, "so much depends upon a red wheel barrow\n");
    }
}
