//! Sprite data model

/// Ordered lines of ASCII art
///
/// Static art lives in `ui::sprites` as `&'static [&'static str]`; a `Sprite`
/// owns its lines and is what the carriage renderer produces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sprite {
    lines: Vec<String>,
}

impl Sprite {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
