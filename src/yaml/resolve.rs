//! Resolve a key path against a document.
//!
//! `find_key_path` answers "where is this key" for paths that fully
//! exist. `find_partial_key_path` matches as many leading segments as
//! possible and works out where the missing tail would have to be
//! inserted to complete the path.

use crate::yaml::lines::LineIndex;
use crate::yaml::parse::{Document, MappingNode, Node, Pair};

/// Position of a key in the source text. Line and column are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLocation {
    pub line: usize,
    pub col: usize,
    pub offset: usize,
}

/// Result of matching a key path prefix against the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialPath {
    /// Number of leading segments that already exist.
    pub existing_depth: usize,
    /// Segments that still have to be created.
    pub remaining: Vec<String>,
    /// Last content position of the matched subtree. New lines go on
    /// the line after it.
    pub insert_anchor: Option<KeyLocation>,
    /// Key whose line supplies the base indentation for new lines.
    pub sibling_anchor: Option<KeyLocation>,
}

/// Location of the key fully matching `segments`, when the whole path
/// exists. Duplicate keys resolve to the first occurrence.
pub fn find_key_path(doc: &Document, segments: &[String]) -> Option<KeyLocation> {
    let mut node = doc.root.as_ref()?;
    let mut location = None;
    for segment in segments {
        let map = node.as_mapping()?;
        let pair = find_pair(map, segment)?;
        location = Some(key_location(&doc.lines, pair.key.range().start));
        node = &pair.value;
    }
    location
}

/// Match a key path prefix and compute the insertion anchors for the
/// missing tail.
pub fn find_partial_key_path(doc: &Document, segments: &[String]) -> PartialPath {
    let lines = &doc.lines;
    let mut node = doc.root.as_ref();
    let mut existing_depth = 0;
    let mut last_map: Option<&MappingNode> = None;
    let mut last_pair: Option<&Pair> = None;

    for segment in segments {
        let Some(Node::Mapping(map)) = node else {
            break;
        };
        last_map = Some(map);
        let Some(pair) = find_pair(map, segment) else {
            break;
        };
        existing_depth += 1;
        last_pair = Some(pair);
        node = Some(&pair.value);
    }

    let remaining: Vec<String> = segments[existing_depth..].to_vec();
    let mut insert_anchor = None;
    let mut sibling_anchor = None;

    if !remaining.is_empty() {
        match last_map {
            Some(map) if !map.pairs.is_empty() => {
                // New lines go after the last entry of the deepest
                // mapping we entered, aligned with that entry's key.
                let pair = &map.pairs[map.pairs.len() - 1];
                if let Node::Scalar(key) = &pair.key {
                    let end = key.range.end.max(pair.value.range().end);
                    // end - 1 keeps the anchor on the last content line
                    // even when a block scalar span runs past it
                    insert_anchor = Some(key_location(lines, end.saturating_sub(1)));
                    sibling_anchor = Some(key_location(lines, key.range.start));
                }
            }
            _ => {
                // The matched value is an empty mapping; anchor on the
                // matched key's own line.
                if let Some(pair) = last_pair {
                    if let Node::Scalar(key) = &pair.key {
                        let loc = key_location(lines, key.range.start);
                        insert_anchor = Some(loc);
                        sibling_anchor = Some(loc);
                    }
                }
            }
        }
    }

    PartialPath {
        existing_depth,
        remaining,
        insert_anchor,
        sibling_anchor,
    }
}

fn find_pair<'a>(map: &'a MappingNode, segment: &str) -> Option<&'a Pair> {
    map.pairs
        .iter()
        .find(|pair| pair.key.as_scalar().map_or(false, |key| key.value == segment))
}

fn key_location(lines: &LineIndex, offset: usize) -> KeyLocation {
    let (line, col) = lines.line_col(offset);
    KeyLocation { line, col, offset }
}
