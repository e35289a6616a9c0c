//! Lenient parsing of enumerated settings
//!
//! An unknown value never aborts a run. It is replaced by the default and a
//! warning, with a typo suggestion when one is close, goes to stderr. This
//! runs before logging is configured, hence the plain writer.

use std::io::Write;

/// Validator for one enumerated setting
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, warning on stderr and returning `default` when invalid
    pub fn parse<T, F>(&self, value: &str, parser: F, default: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, default, &mut std::io::stderr())
    }

    pub fn parse_with_writer<T, F, W>(&self, value: &str, parser: F, default: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return parsed;
        }

        let _ = writeln!(
            writer,
            "warning: invalid {} value '{}'{}; valid values: {}",
            self.var_name,
            value,
            self.suggest(value),
            self.valid_values.join(", ")
        );
        default
    }

    /// Closest valid value within two edits
    fn suggest(&self, value: &str) -> String {
        let input = value.trim().to_lowercase();

        self.valid_values
            .iter()
            .map(|&valid| (valid, levenshtein(&input, valid)))
            .filter(|&(_, dist)| dist > 0 && dist <= 2)
            .min_by_key(|&(_, dist)| dist)
            .map(|(valid, _)| format!(" (did you mean '{}'?)", valid))
            .unwrap_or_default()
    }
}

/// Edit distance between two ASCII-ish strings
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() {
        return b.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
