//! Formatting utilities used for report output.

use crate::utils::time::split_secs;

/// "new york city" → "New York City"
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn secs2readable(secs: i64) -> String {
    let (h, m, s) = split_secs(secs);
    format!("{} hours, {} minutes and {} seconds", h, m, s)
}

pub fn separator(ch: &str, width: usize) -> String {
    let ch = if ch.is_empty() { "-" } else { ch };
    ch.repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("new york city"), "New York City");
        assert_eq!(title_case("MONTH"), "Month");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn readable_duration() {
        assert_eq!(secs2readable(3725), "1 hours, 2 minutes and 5 seconds");
    }
}
