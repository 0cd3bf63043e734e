use crate::error::{QrSheetError, Result};
use std::fmt;

/// A participant identifier. Renders as "P" plus the number zero-padded
/// to four digits ("P0042"); larger numbers keep all their digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(u32);

impl Code {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// The label string encoded into the QR symbol and printed under it.
    pub fn label(&self) -> String {
        format!("P{:04}", self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{:04}", self.0)
    }
}

/// An inclusive range of participant numbers, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRange {
    start: u32,
    end: u32,
}

impl CodeRange {
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(QrSheetError::Range(format!(
                "start ({}) must not exceed end ({})",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Resolve the range from CLI positionals: none means the configured
    /// defaults, two means that pair, anything else is a usage error.
    pub fn from_args(
        start: Option<u32>,
        end: Option<u32>,
        defaults: (u32, u32),
    ) -> Result<Self> {
        match (start, end) {
            (None, None) => Self::new(defaults.0, defaults.1),
            (Some(s), Some(e)) => Self::new(s, e),
            _ => Err(QrSheetError::Range(
                "expected zero or two arguments (usage: qrsheet [START END])".to_string(),
            )),
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Codes in ascending identifier order.
    pub fn codes(&self) -> impl Iterator<Item = Code> {
        (self.start..=self.end).map(Code::new)
    }
}

impl fmt::Display for CodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", Code::new(self.start), Code::new(self.end))
    }
}
