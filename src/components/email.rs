use crate::{Error, Result};

/// One character of an address part: anything but `@` and ECMAScript
/// whitespace. U+0085 is not whitespace there.
const PART_CHAR: &str = concat!(
    "[^@\t\n\u{0B}\u{0C}\r \u{A0}\u{1680}",
    "\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}]",
);

#[derive(Debug, Clone)]
pub(crate) struct EmailPattern {
    backend: fancy_regex::Regex,
}

impl EmailPattern {
    pub(crate) fn new() -> Result<Self> {
        // Local part, `@`, domain, `.`, top-level part.
        let pattern = format!("^{PART_CHAR}+@{PART_CHAR}+\\.{PART_CHAR}+$");
        let backend =
            fancy_regex::Regex::new(&pattern).map_err(|err| Error::Regex(err.to_string()))?;
        Ok(Self { backend })
    }

    pub(crate) fn is_match(&self, input: &str) -> Result<bool> {
        self.backend
            .is_match(input)
            .map_err(|err| Error::Regex(err.to_string()))
    }
}
