//! Fixed language → extension table.
//!
//! The extension is the crawl's file filter; the tag is what gets stamped on
//! every record. Adding a language means adding one row here.

use std::fmt;

/// A supported crawl target: language tag plus its dot-extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language {
    tag: &'static str,
    extension: &'static str,
}

impl Language {
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn extension(&self) -> &'static str {
        self.extension
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag)
    }
}

pub const LANGUAGES: &[Language] = &[
    Language { tag: "python", extension: ".py" },
    Language { tag: "javascript", extension: ".js" },
    Language { tag: "typescript", extension: ".ts" },
    Language { tag: "java", extension: ".java" },
    Language { tag: "c++", extension: ".cpp" },
    Language { tag: "c", extension: ".c" },
    Language { tag: "rust", extension: ".rs" },
];

/// Clap value parser for the positional language argument.
pub fn parse_language(s: &str) -> Result<Language, String> {
    LANGUAGES
        .iter()
        .copied()
        .find(|l| l.tag == s)
        .ok_or_else(|| {
            let tags: Vec<&str> = LANGUAGES.iter().map(|l| l.tag).collect();
            format!("unknown language {s:?} (supported: {})", tags.join(", "))
        })
}
