// Keyflip Script Detection
// Picks the conversion direction from the dominant script of a sample

use std::fmt;

use crate::transform::Direction;

/// Arabic block
const TARGET_SCRIPT: std::ops::RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

/// Which layout a piece of text was most likely typed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptClass {
    /// Latin / QWERTY
    Source,
    /// Arabic (102)
    Target,
}

impl ScriptClass {
    /// Direction that converts text of this class to the other layout
    pub fn direction(self) -> Direction {
        match self {
            ScriptClass::Source => Direction::SourceToTarget,
            ScriptClass::Target => Direction::TargetToSource,
        }
    }
}

impl fmt::Display for ScriptClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptClass::Source => write!(f, "latin"),
            ScriptClass::Target => write!(f, "arabic"),
        }
    }
}

/// Per-script codepoint tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptCounts {
    pub latin: usize,
    pub target: usize,
}

impl ScriptCounts {
    pub fn classify(self) -> ScriptClass {
        if self.target > self.latin {
            ScriptClass::Target
        } else {
            ScriptClass::Source
        }
    }
}

/// Count ASCII letters and Arabic-block codepoints in `text`
pub fn count(text: &str) -> ScriptCounts {
    text.chars().fold(ScriptCounts::default(), |mut acc, c| {
        if TARGET_SCRIPT.contains(&c) {
            acc.target += 1;
        } else if c.is_ascii_alphabetic() {
            acc.latin += 1;
        }
        acc
    })
}

/// Classify `text` by dominant script.
///
/// Target only when Arabic codepoints strictly outnumber ASCII letters;
/// ties, empty input and text without letters are Source.
pub fn classify(text: &str) -> ScriptClass {
    count(text).classify()
}
