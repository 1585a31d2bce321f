use std::io::{self, BufRead};

/// Read whitespace separated words, line by line. Empty pieces are dropped.
pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        words.extend(line?.split_whitespace().map(str::to_string));
    }
    Ok(words)
}

/// Length of the words written out with one separator between neighbours.
pub fn total_length<S: AsRef<str>>(words: &[S]) -> usize {
    let chars: usize = words.iter().map(|w| w.as_ref().chars().count()).sum();
    chars + words.len().saturating_sub(1)
}

#[test]
fn read_words_test() {
    let text = "  the quick\tbrown fox \n\njumps   over\r\nthe lazy dog\n";
    let words = read_words(text.as_bytes()).unwrap();
    assert_eq!(
        words,
        vec!["the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog"]
    );
}

#[test]
fn total_length_test() {
    assert_eq!(total_length::<&str>(&[]), 0);
    assert_eq!(total_length(&["one"]), 3);
    assert_eq!(total_length(&["one", "two", "three"]), 13);
    assert_eq!(total_length(&["né", "là"]), 5);
}
