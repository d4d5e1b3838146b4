//! Line/column tracking for document nodes.
//!
//! The teacher never tracked source positions at all -- every
//! `ValidationError` it could produce pointed only at a JSON Pointer
//! string. [`SourceMap`] re-scans the document's original source text
//! (when the caller has it) and builds a JSON-Pointer-keyed index of
//! where each value starts, so [`crate::error::ValidationError::spec_line`]
//! /`spec_col` can point a reader at the exact line in their YAML/JSON
//! file instead of just a pointer string.
//!
//! When no source text is available (a caller handed us a bare
//! `serde_json::Value` with no provenance), every lookup degenerates to
//! `(1, 1)` -- callers never need to branch on whether a `SourceMap`
//! was built from text or left empty.

use std::collections::HashMap;

/// Maps a JSON Pointer path (the same format `types::json_path::JsonPath`
/// produces, leading with `/`) to the 1-based `(line, column)` of the
/// start of that value in the original source text.
#[derive(Debug, Default, Clone)]
pub struct SourceMap {
    positions: HashMap<String, (usize, usize)>,
}

impl SourceMap {
    pub fn empty() -> Self {
        SourceMap {
            positions: HashMap::new(),
        }
    }

    /// Scans raw JSON source text and indexes the start position of
    /// every object member and array element by its JSON Pointer.
    pub fn from_json_source(source: &str) -> SourceMap {
        let mut positions = HashMap::new();
        let mut scanner = Scanner::new(source);
        scanner.scan_value(&mut positions, "");
        SourceMap { positions }
    }

    /// Looks up the position for `pointer` (e.g. `/paths/~1pets/get`),
    /// falling back to `(1, 1)` when unknown.
    pub fn lookup(&self, pointer: &str) -> (usize, usize) {
        self.positions.get(pointer).copied().unwrap_or((1, 1))
    }
}

struct Scanner<'a> {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    _source: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Scanner {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            _source: source,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    /// Scans a single JSON value at the current position, recording
    /// `current_pointer` in `positions`, then recursing into objects and
    /// arrays to record their children.
    fn scan_value(&mut self, positions: &mut HashMap<String, (usize, usize)>, current_pointer: &str) {
        self.skip_whitespace();
        positions.insert(current_pointer.to_string(), (self.line, self.col));
        match self.peek() {
            Some('{') => self.scan_object(positions, current_pointer),
            Some('[') => self.scan_array(positions, current_pointer),
            Some('"') => {
                self.skip_string();
            }
            _ => self.skip_scalar(),
        }
    }

    fn scan_object(&mut self, positions: &mut HashMap<String, (usize, usize)>, base: &str) {
        self.advance(); // consume '{'
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.advance();
                    return;
                }
                Some('"') => {
                    let key = self.read_string();
                    self.skip_whitespace();
                    if self.peek() == Some(':') {
                        self.advance();
                    }
                    let child_pointer = format!("{base}/{}", escape_pointer_segment(&key));
                    self.scan_value(positions, &child_pointer);
                    self.skip_whitespace();
                    if self.peek() == Some(',') {
                        self.advance();
                    }
                }
                Some(_) => {
                    self.advance();
                }
                None => return,
            }
        }
    }

    fn scan_array(&mut self, positions: &mut HashMap<String, (usize, usize)>, base: &str) {
        self.advance(); // consume '['
        let mut index = 0usize;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(']') => {
                    self.advance();
                    return;
                }
                None => return,
                _ => {
                    let child_pointer = format!("{base}/{index}");
                    self.scan_value(positions, &child_pointer);
                    index += 1;
                    self.skip_whitespace();
                    if self.peek() == Some(',') {
                        self.advance();
                    }
                }
            }
        }
    }

    fn read_string(&mut self) -> String {
        let mut out = String::new();
        self.advance(); // opening quote
        while let Some(c) = self.peek() {
            if c == '"' {
                self.advance();
                break;
            }
            if c == '\\' {
                self.advance();
                if let Some(escaped) = self.advance() {
                    out.push(escaped);
                }
                continue;
            }
            out.push(c);
            self.advance();
        }
        out
    }

    fn skip_string(&mut self) {
        let _ = self.read_string();
    }

    fn skip_scalar(&mut self) {
        while matches!(self.peek(), Some(c) if c != ',' && c != '}' && c != ']' && !c.is_whitespace())
        {
            self.advance();
        }
    }
}

fn escape_pointer_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_nested_member_position() {
        let source = "{\n  \"paths\": {\n    \"/pets\": {\n      \"get\": {}\n    }\n  }\n}";
        let map = SourceMap::from_json_source(source);
        let (line, _col) = map.lookup("/paths/~1pets/get");
        assert_eq!(line, 4);
    }

    #[test]
    fn unknown_pointer_falls_back_to_one_one() {
        let map = SourceMap::empty();
        assert_eq!(map.lookup("/nowhere"), (1, 1));
    }

    #[test]
    fn array_elements_are_indexed() {
        let source = "{\"items\": [1, 2, 3]}";
        let map = SourceMap::from_json_source(source);
        let (_, col) = map.lookup("/items/1");
        assert!(col > 1);
    }
}
