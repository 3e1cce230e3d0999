//! Clipboard-level operations.
//!
//! `copy_key_path` turns a cursor position into a dotted path, and
//! `paste_key_path` turns a dotted path into the smallest edit that
//! makes the path exist. Edits are returned as offsets plus text so a
//! caller can apply them to a buffer without reformatting anything.

use crate::yaml::{
    find_key_path, find_partial_key_path, generate_structure, is_offset_on_key, is_valid_key_path,
    join_key_path, key_path_at_offset, normalize_key_path, parse_document, split_key_path,
    Document, Error, KeyLocation,
};

/// How a pasted key path affects the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteAction {
    /// New structure to splice into the text.
    Insert {
        kind: InsertKind,
        text: String,
        insert_offset: usize,
        cursor_offset: usize,
    },
    /// The whole path already exists; move the cursor to it.
    Navigate { target: KeyLocation },
    /// The clipboard does not hold a key path; paste it untouched.
    NotAPath,
}

/// Whether an insert extends an existing subtree or starts from
/// scratch at the cursor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertKind {
    Full,
    Partial,
}

/// Dotted path of the mapping key at `offset`, or `None` when the
/// cursor is not on a key.
pub fn copy_key_path(text: &str, offset: usize) -> Result<Option<String>, Error> {
    let doc = parse_document(text)?;
    if !is_offset_on_key(&doc, offset) {
        log::debug!("offset {} is not on a mapping key", offset);
        return Ok(None);
    }
    let path = key_path_at_offset(&doc, offset).map(|segments| join_key_path(&segments));
    if let Some(path) = &path {
        log::debug!("key path at offset {}: {}", offset, path);
    }
    Ok(path)
}

/// Work out the edit for pasting `clipboard` into `text` at
/// `cursor_offset`. Missing nesting levels are indented with
/// `indent_unit`.
pub fn paste_key_path(
    text: &str,
    clipboard: &str,
    cursor_offset: usize,
    indent_unit: &str,
) -> Result<PasteAction, Error> {
    let path = normalize_key_path(clipboard);
    if !is_valid_key_path(path) {
        log::debug!("clipboard is not a key path: {:?}", clipboard);
        return Ok(PasteAction::NotAPath);
    }
    let segments = split_key_path(path);
    let doc = parse_document(text)?;

    if let Some(target) = find_key_path(&doc, &segments) {
        log::info!("key path {} already exists, navigating", path);
        return Ok(PasteAction::Navigate { target });
    }

    let partial = find_partial_key_path(&doc, &segments);
    if partial.existing_depth > 0 {
        if let (Some(insert), Some(sibling)) = (partial.insert_anchor, partial.sibling_anchor) {
            log::info!(
                "extending {} at depth {} with {} new segment(s)",
                path,
                partial.existing_depth,
                partial.remaining.len()
            );
            return Ok(partial_insert(
                &doc,
                &partial.remaining,
                insert,
                sibling,
                indent_unit,
            ));
        }
    }

    log::info!("inserting {} at the cursor", path);
    Ok(full_insert(&doc, &segments, cursor_offset, indent_unit))
}

/// Splice `insertion` into `text` at a char offset.
pub fn apply_insert(text: &str, insert_offset: usize, insertion: &str) -> String {
    let byte = text
        .char_indices()
        .nth(insert_offset)
        .map(|(b, _)| b)
        .unwrap_or(text.len());
    let mut edited = String::with_capacity(text.len() + insertion.len());
    edited.push_str(&text[..byte]);
    edited.push_str(insertion);
    edited.push_str(&text[byte..]);
    edited
}

/// Extend an existing subtree on the line after its last content.
fn partial_insert(
    doc: &Document,
    remaining: &[String],
    insert: KeyLocation,
    sibling: KeyLocation,
    indent_unit: &str,
) -> PasteAction {
    let lines = &doc.lines;
    let base_indent = lines.line_indent(sibling.line);
    let structure = generate_structure(remaining, base_indent, indent_unit);
    let insert_line = insert.line + 1;
    if insert_line >= lines.line_count() {
        // Document ends without a newline; open one first.
        let insert_offset = lines.char_len();
        let text = format!("\n{}", structure);
        let cursor_offset = insert_offset + text.chars().count();
        PasteAction::Insert {
            kind: InsertKind::Partial,
            text,
            insert_offset,
            cursor_offset,
        }
    } else {
        let insert_offset = lines.line_start(insert_line);
        let cursor_offset = insert_offset + structure.chars().count();
        let text = format!("{}\n", structure);
        PasteAction::Insert {
            kind: InsertKind::Partial,
            text,
            insert_offset,
            cursor_offset,
        }
    }
}

/// Insert the whole path at the cursor, indented like the cursor line.
fn full_insert(
    doc: &Document,
    segments: &[String],
    cursor_offset: usize,
    indent_unit: &str,
) -> PasteAction {
    let lines = &doc.lines;
    let offset = cursor_offset.min(lines.char_len());
    let base_indent = lines.line_indent(lines.line_of(offset));
    let text = generate_structure(segments, base_indent, indent_unit);
    let cursor_offset = offset + text.chars().count();
    PasteAction::Insert {
        kind: InsertKind::Full,
        text,
        insert_offset: offset,
        cursor_offset,
    }
}
