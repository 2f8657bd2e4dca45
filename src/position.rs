use std::sync::Arc;

/// Cursor location inside a named source text.
///
/// `offset`, `line`, and `column` are zero-based and count characters,
/// not bytes. Cloning yields an independent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub source_name: Arc<str>,
    /// Full text being scanned, kept so diagnostics can quote the line.
    pub source_text: Arc<str>,
}

impl Position {
    /// Position of the first character of `source_text`.
    #[must_use]
    pub const fn start(source_name: Arc<str>, source_text: Arc<str>) -> Self {
        Self {
            offset: 0,
            line: 0,
            column: 0,
            source_name,
            source_text,
        }
    }

    /// Step past `current`, the character the cursor is leaving.
    pub const fn advance(&mut self, current: Option<char>) {
        self.offset += 1;
        self.column += 1;

        if matches!(current, Some('\n')) {
            self.line += 1;
            self.column = 0;
        }
    }
}

/// Half-open range between two position snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}
