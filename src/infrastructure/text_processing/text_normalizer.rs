use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

use crate::domain::{CleanedText, KeywordBlacklist};

static LEADING_ENUMERATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.\-\s]+").unwrap());

const MIN_RAW_LINE_CHARS: usize = 4;
const MIN_KEPT_LINE_CHARS: usize = 4;

/// Line-oriented cleaner that drops noise and administrative metadata from
/// extracted syllabus text. Output order follows input order.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    blacklist: KeywordBlacklist,
}

impl TextNormalizer {
    pub fn new(blacklist: KeywordBlacklist) -> Self {
        Self { blacklist }
    }

    pub fn blacklist(&self) -> &KeywordBlacklist {
        &self.blacklist
    }

    pub fn normalize(&self, raw: &str) -> CleanedText {
        let normalized: String = raw.nfkc().collect();

        let lines = normalized
            .split(['\n', '\r', '\u{000C}'])
            .filter_map(|line| self.clean_line(line))
            .collect();

        CleanedText::new(lines)
    }

    fn clean_line(&self, line: &str) -> Option<String> {
        let mut collapsed = String::with_capacity(line.len());
        collapse_internal_whitespace(line.trim(), &mut collapsed);

        if collapsed.chars().count() < MIN_RAW_LINE_CHARS {
            return None;
        }

        if self.blacklist.matches(&collapsed) {
            return None;
        }

        let stripped = LEADING_ENUMERATION.replace(&collapsed, "");

        (stripped.chars().count() >= MIN_KEPT_LINE_CHARS).then(|| stripped.into_owned())
    }
}

fn collapse_internal_whitespace(line: &str, out: &mut String) {
    let mut prev_was_space = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}
