//! Positioned YAML tree built from parser events.
//!
//! Only the structure that key path operations need is kept: mappings,
//! their scalar keys, and source ranges. Sequences, aliases and other
//! constructs collapse into opaque nodes that still know where they end,
//! so insertions land after them instead of inside them.

use saphyr_parser::{Event, Parser, ScalarStyle, Span};

use crate::yaml::error::Error;
use crate::yaml::lines::LineIndex;

/// Char offset range of a node in the source text.
///
/// `end` is exclusive for slicing, but `contains` also accepts the
/// position just past the node so a cursor sitting at either edge of a
/// key still hits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Range { start, end }
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarNode {
    pub value: String,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingNode {
    pub pairs: Vec<Pair>,
    pub range: Range,
}

/// A node we do not navigate into (sequence, alias, tagged collection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherNode {
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: Node,
    pub value: Node,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Scalar(ScalarNode),
    Mapping(MappingNode),
    Other(OtherNode),
}

impl Node {
    pub fn range(&self) -> Range {
        match self {
            Node::Scalar(n) => n.range,
            Node::Mapping(n) => n.range,
            Node::Other(n) => n.range,
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarNode> {
        match self {
            Node::Scalar(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&MappingNode> {
        match self {
            Node::Mapping(n) => Some(n),
            _ => None,
        }
    }
}

/// First document of a YAML text, with line bookkeeping for the whole
/// text. `root` is `None` when the text holds no document at all.
pub struct Document<'t> {
    pub root: Option<Node>,
    pub lines: LineIndex<'t>,
}

/// Parse the first document of `text` into a positioned tree.
pub fn parse_document(text: &str) -> Result<Document<'_>, Error> {
    let events = collect_events(text)?;
    let mut builder = TreeBuilder {
        events: &events,
        pos: 0,
    };
    let root = builder.build_root();
    Ok(Document {
        root,
        lines: LineIndex::new(text),
    })
}

fn collect_events(text: &str) -> Result<Vec<(Event<'_>, Span)>, Error> {
    let parser = Parser::new_from_str(text);
    let mut events = Vec::new();
    for result in parser {
        let (event, span) = result?;
        events.push((event, span));
    }
    Ok(events)
}

struct TreeBuilder<'a> {
    events: &'a [(Event<'a>, Span)],
    pos: usize,
}

impl<'a> TreeBuilder<'a> {
    fn peek(&self) -> Option<&(Event<'a>, Span)> {
        self.events.get(self.pos)
    }

    fn advance(&mut self) -> &(Event<'a>, Span) {
        let item = &self.events[self.pos];
        self.pos += 1;
        item
    }

    fn build_root(&mut self) -> Option<Node> {
        loop {
            let Some((event, _)) = self.peek() else {
                return None;
            };
            match event {
                Event::StreamStart => {
                    self.advance();
                }
                Event::DocumentStart(_) => {
                    self.advance();
                    return self.build_node();
                }
                _ => return None,
            }
        }
    }

    fn build_node(&mut self) -> Option<Node> {
        let Some((event, _)) = self.peek() else {
            return None;
        };
        match event {
            Event::Scalar(..) => Some(self.build_scalar()),
            Event::MappingStart(..) => Some(self.build_mapping()),
            Event::SequenceStart(..) => Some(self.build_other()),
            Event::Alias(_) => {
                let (_, span) = self.advance();
                Some(Node::Other(OtherNode {
                    range: Range::new(span.start.index(), span.end.index()),
                }))
            }
            _ => None,
        }
    }

    fn build_scalar(&mut self) -> Node {
        let (event, span) = self.advance();
        let (value, style) = if let Event::Scalar(v, s, _, _) = event {
            (v.to_string(), *s)
        } else {
            unreachable!()
        };
        let start = span.start.index();
        // Implicit nulls carry the span of the next token, which may sit
        // on a later line. Give them a zero-width range here so that
        // build_mapping can pin them back to their key.
        let range = if value.is_empty() && matches!(style, ScalarStyle::Plain) {
            Range::new(start, start)
        } else {
            Range::new(start, span.end.index())
        };
        Node::Scalar(ScalarNode { value, range })
    }

    fn build_mapping(&mut self) -> Node {
        let (_, span) = self.advance();
        let span = *span;
        let start = span.start.index();
        let mut content_end = span.end.index();
        let mut pairs = Vec::new();
        loop {
            let Some((event, _)) = self.peek() else {
                break;
            };
            if matches!(event, Event::MappingEnd) {
                break;
            }
            let Some(key) = self.build_node() else {
                break;
            };
            let key_end = key.range().end;
            let mut value = self.build_node().unwrap_or(Node::Scalar(ScalarNode {
                value: String::new(),
                range: Range::new(key_end, key_end),
            }));
            if let Node::Scalar(s) = &mut value {
                if s.range.start == s.range.end {
                    s.range = Range::new(key_end, key_end);
                }
            }
            content_end = content_end.max(key_end).max(value.range().end);
            pairs.push(Pair { key, value });
        }
        if let Some((Event::MappingEnd, _)) = self.peek() {
            self.advance();
        }
        Node::Mapping(MappingNode {
            pairs,
            range: Range::new(start, content_end),
        })
    }

    /// Skip a whole sequence subtree, tracking where its content ends.
    fn build_other(&mut self) -> Node {
        let (_, span) = self.advance();
        let span = *span;
        let start = span.start.index();
        let mut content_end = span.end.index();
        let mut depth = 1;
        while depth > 0 {
            let Some((event, span)) = self.peek() else {
                break;
            };
            match event {
                Event::SequenceStart(..) | Event::MappingStart(..) => depth += 1,
                Event::SequenceEnd | Event::MappingEnd => depth -= 1,
                Event::Scalar(v, s, _, _) => {
                    // Implicit null spans point at the next token
                    if !(v.is_empty() && matches!(s, ScalarStyle::Plain)) {
                        content_end = content_end.max(span.end.index());
                    }
                }
                Event::Alias(_) => {
                    content_end = content_end.max(span.end.index());
                }
                _ => {}
            }
            self.advance();
        }
        Node::Other(OtherNode {
            range: Range::new(start, content_end),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(text: &str) -> Node {
        parse_document(text)
            .unwrap()
            .root
            .expect("fixture has a document")
    }

    // ==================== tree shape ====================

    #[test]
    fn builds_nested_mappings() {
        let root = root("a:\n  b:\n    c: 1\n  d: 2\n");
        let map = root.as_mapping().unwrap();
        assert_eq!(map.pairs.len(), 1);
        let key = map.pairs[0].key.as_scalar().unwrap();
        assert_eq!(key.value, "a");
        assert_eq!(key.range, Range::new(0, 1));

        let inner = map.pairs[0].value.as_mapping().unwrap();
        assert_eq!(inner.pairs.len(), 2);
        assert_eq!(inner.pairs[0].key.as_scalar().unwrap().value, "b");
        assert_eq!(inner.pairs[1].key.as_scalar().unwrap().value, "d");

        let c_map = inner.pairs[0].value.as_mapping().unwrap();
        let c_value = c_map.pairs[0].value.as_scalar().unwrap();
        assert_eq!(c_value.value, "1");
        assert_eq!(c_value.range, Range::new(15, 16));
    }

    #[test]
    fn mapping_range_covers_content() {
        let root = root("a:\n  b:\n    c: 1\n  d: 2\n");
        assert_eq!(root.range(), Range::new(0, 23));
        let inner = root.as_mapping().unwrap().pairs[0].value.range();
        assert_eq!(inner, Range::new(5, 23));
    }

    #[test]
    fn builds_flow_mapping() {
        let root = root("a: {x: 1}\n");
        let inner = root.as_mapping().unwrap().pairs[0].value.as_mapping().unwrap();
        assert_eq!(inner.pairs.len(), 1);
        assert_eq!(inner.range, Range::new(3, 8));
    }

    #[test]
    fn scalar_root() {
        let root = root("just text\n");
        let s = root.as_scalar().unwrap();
        assert_eq!(s.value, "just text");
        assert_eq!(s.range, Range::new(0, 9));
    }

    // ==================== null and sequence spans ====================

    #[test]
    fn pins_implicit_null_to_its_key() {
        let root = root("a:\nb: 2\n");
        let map = root.as_mapping().unwrap();
        let null = map.pairs[0].value.as_scalar().unwrap();
        assert_eq!(null.value, "");
        assert_eq!(null.range, Range::new(1, 1));
    }

    #[test]
    fn sequence_collapses_to_other_with_content_end() {
        let root = root("list:\n  - one\n  - two\nafter: 3\n");
        let map = root.as_mapping().unwrap();
        assert_eq!(map.pairs.len(), 2);
        let seq = &map.pairs[0].value;
        assert!(matches!(seq, Node::Other(_)));
        // content end is the end of "two", not the start of "after"
        assert_eq!(seq.range().end, 21);
    }

    // ==================== document boundaries ====================

    #[test]
    fn keeps_first_document_only() {
        let root = root("first: 1\n---\nsecond: 2\n");
        let map = root.as_mapping().unwrap();
        assert_eq!(map.pairs.len(), 1);
        assert_eq!(map.pairs[0].key.as_scalar().unwrap().value, "first");
    }

    #[test]
    fn empty_text_has_no_root() {
        let doc = parse_document("").unwrap();
        assert!(doc.root.is_none());
    }

    #[test]
    fn syntax_error_is_reported() {
        assert!(parse_document("key: [unclosed").is_err());
    }
}
