//! Text normalization and tokenization.
//!
//! Every document passes through [`normalize`] before it is split into
//! tokens, so downstream statistics only ever see lowercase,
//! punctuation-free words separated by single spaces.

/// Normalize raw text into canonical form.
///
/// Lowercases everything, removes ASCII punctuation
/// (``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``), collapses runs of whitespace
/// (newlines and tabs included) into single spaces, and trims both ends.
///
/// Total on any input; the empty string normalizes to itself.
#[tracing::instrument(skip_all, fields(text_len = raw.len()))]
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into tokens on whitespace.
pub fn tokenize(clean_text: &str) -> Vec<String> {
    clean_text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Hello, World!"), "hello world");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(
            normalize("  sturdy\tdesk\n\n  easy   assembly  "),
            "sturdy desk easy assembly"
        );
    }

    #[test]
    fn removes_every_ascii_punctuation_mark() {
        let all = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
        assert_eq!(normalize(all), "");
        assert_eq!(normalize("don't re-use e-mail"), "dont reuse email");
    }

    #[test]
    fn keeps_non_ascii_letters() {
        assert_eq!(normalize("Café, Crème!"), "café crème");
        // only ASCII punctuation is stripped
        assert_eq!(normalize("a \u{2014} b"), "a \u{2014} b");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "",
            "Plain words",
            "The chair's legs... wobble!!  A LOT.\r\n",
            "Ünïcödé, tabs\tand\u{00a0}nbsp",
            "(parenthesized) [bracketed] {braced}",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn idempotent_for_every_short_string() {
        // each character class the normalizer treats differently
        const ALPHABET: [char; 12] = [
            'a', 'Z', '\u{c9}', '\u{3a3}', '\u{130}', '.', '\'', '-', ' ', '\t', '\n', '\u{a0}',
        ];

        let mut inputs = vec![String::new()];
        let mut frontier = vec![String::new()];
        for _ in 0..3 {
            frontier = frontier
                .iter()
                .flat_map(|prefix| {
                    ALPHABET.iter().map(move |&c| {
                        let mut s = prefix.clone();
                        s.push(c);
                        s
                    })
                })
                .collect();
            inputs.extend(frontier.iter().cloned());
        }
        assert_eq!(inputs.len(), 1 + 12 + 144 + 1728);

        for s in &inputs {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn tokenize_splits_on_spaces() {
        assert_eq!(tokenize("cat dog cat"), vec!["cat", "dog", "cat"]);
        assert!(tokenize("").is_empty());
    }
}
