//! Text rendering of a [`ConfigDocument`].
//!
//! The format is a YAML subset: two-space indentation per depth level,
//! `key: value` scalars, `key:` sections, and opaque text blocks indented
//! line by line. Top-level sections are separated by one blank line.
//!
//! Documents are written as an ordered series of fragments (app metadata,
//! one per layer, one per requirement) appended at a tracked cursor. The
//! concatenation of all fragments is byte-identical to
//! [`Serializer::render_document`].

use std::io::{self, Cursor, Seek, SeekFrom, Write};

use crate::domain::entities::{ConfigDocument, ConfigNode};

/// One indentation level.
pub const INDENT: &str = "  ";

/// What a fragment of the output represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentKind {
    /// The `app:` header and its scalar metadata.
    App,
    Layer(String),
    Requirement(String),
}

/// A rendered, independently appendable piece of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
}

pub struct Serializer;

impl Serializer {
    /// Render `node` as if it sat at `depth` (root = 0, not indented).
    pub fn render_fragment(node: &ConfigNode, depth: usize) -> String {
        let mut out = String::new();
        render_into(&mut out, node, depth);
        out
    }

    /// Render the whole document in one go.
    pub fn render_document(document: &ConfigDocument) -> String {
        document
            .roots()
            .map(|root| Self::render_fragment(root, 0))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Split the document into its ordered fragments.
    ///
    /// Requirement fragments carry their leading blank separator, layer
    /// fragments are contiguous.
    pub fn fragments(document: &ConfigDocument) -> Vec<Fragment> {
        let app = document.app();
        let mut header = format!("{}:\n", app.key().unwrap_or_default());
        for meta in app.children().iter().filter(|n| !n.is_section()) {
            render_into(&mut header, meta, 1);
        }

        let mut fragments = vec![Fragment {
            kind: FragmentKind::App,
            text: header,
        }];

        fragments.extend(document.layers().map(|layer| Fragment {
            kind: FragmentKind::Layer(layer.key().unwrap_or_default().to_string()),
            text: Self::render_fragment(layer, 1),
        }));

        fragments.extend(document.requirements().iter().map(|req| Fragment {
            kind: FragmentKind::Requirement(req.key().unwrap_or_default().to_string()),
            text: format!("\n{}", Self::render_fragment(req, 0)),
        }));

        fragments
    }

    /// Write `text` at byte offset `cursor` and return the offset just past it.
    ///
    /// The caller owns the cursor; feeding each returned value into the next
    /// call keeps fragments back to back without overlap.
    pub fn append_at<W: Write + Seek>(stream: &mut W, text: &str, cursor: u64) -> io::Result<u64> {
        stream.seek(SeekFrom::Start(cursor))?;
        stream.write_all(text.as_bytes())?;
        Ok(cursor + text.len() as u64)
    }

    /// Append every fragment into an in-memory buffer and return the bytes,
    /// ready for a single write to storage.
    pub fn write_document(document: &ConfigDocument) -> io::Result<Vec<u8>> {
        let mut stream = Cursor::new(Vec::new());
        let mut cursor = 0;
        for fragment in Self::fragments(document) {
            cursor = Self::append_at(&mut stream, &fragment.text, cursor)?;
        }
        let bytes = stream.into_inner();
        debug_assert_eq!(cursor, bytes.len() as u64);
        Ok(bytes)
    }
}

fn render_into(out: &mut String, node: &ConfigNode, depth: usize) {
    let indent = INDENT.repeat(depth);
    match node {
        ConfigNode::Scalar { key, value } => {
            out.push_str(&format!("{indent}{key}: {value}\n"));
        }
        ConfigNode::Section { key, children } => {
            out.push_str(&format!("{indent}{key}:\n"));
            for child in children {
                render_into(out, child, depth + 1);
            }
        }
        ConfigNode::Block(text) => {
            for line in text.lines() {
                if line.trim().is_empty() {
                    out.push('\n');
                } else {
                    out.push_str(&format!("{indent}{line}\n"));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Layer;

    fn sample() -> ConfigDocument {
        let mut doc = ConfigDocument::new("shop");
        doc.push_layer(Layer::Database, "postgres").unwrap();
        doc.push_layer(Layer::Server, "go").unwrap();
        doc.push_requirement(&"authentication".into(), "method: password\nsession:\n  ttl: 3600\n")
            .unwrap();
        doc.push_requirement(&"authorization".into(), "method: JWT")
            .unwrap();
        doc
    }

    #[test]
    fn app_only_document() {
        let doc = ConfigDocument::new("myapp");
        assert_eq!(Serializer::render_document(&doc), "app:\n  name: myapp\n");
    }

    #[test]
    fn layer_and_requirement_document() {
        let mut doc = ConfigDocument::new("base");
        doc.push_layer(Layer::Server, "go").unwrap();
        doc.push_requirement(&"authorization".into(), "method: JWT")
            .unwrap();

        assert_eq!(
            Serializer::render_document(&doc),
            "app:\n  name: base\n  server:\n    core: go\n\nauthorization:\n  method: JWT\n"
        );
    }

    #[test]
    fn nested_requirement_text_is_shifted_one_level() {
        let text = Serializer::render_document(&sample());
        assert!(text.contains("\nauthentication:\n  method: password\n  session:\n    ttl: 3600\n"));
    }

    #[test]
    fn blank_lines_in_blocks_stay_blank() {
        let node = ConfigNode::section("r").with_child(ConfigNode::block("a: 1\n\nb: 2"));
        assert_eq!(Serializer::render_fragment(&node, 0), "r:\n  a: 1\n\n  b: 2\n");
    }

    #[test]
    fn crlf_block_lines_are_normalized() {
        let node = ConfigNode::block("a: 1\r\nb: 2");
        assert_eq!(Serializer::render_fragment(&node, 1), "  a: 1\n  b: 2\n");
    }

    #[test]
    fn fragments_concatenate_to_document() {
        let doc = sample();
        let joined: String = Serializer::fragments(&doc)
            .into_iter()
            .map(|f| f.text)
            .collect();
        assert_eq!(joined, Serializer::render_document(&doc));
    }

    #[test]
    fn fragment_order_is_app_layers_requirements() {
        let kinds: Vec<_> = Serializer::fragments(&sample())
            .into_iter()
            .map(|f| f.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                FragmentKind::App,
                FragmentKind::Layer("database".into()),
                FragmentKind::Layer("server".into()),
                FragmentKind::Requirement("authentication".into()),
                FragmentKind::Requirement("authorization".into()),
            ]
        );
    }

    #[test]
    fn append_at_advances_cursor_by_bytes_written() {
        let mut stream = Cursor::new(Vec::new());
        let cursor = Serializer::append_at(&mut stream, "app:\n", 0).unwrap();
        let cursor = Serializer::append_at(&mut stream, "  name: é\n", cursor).unwrap();

        assert_eq!(cursor, 16);
        assert_eq!(stream.into_inner(), "app:\n  name: é\n".as_bytes());
    }

    #[test]
    fn written_bytes_match_rendered_document() {
        let doc = sample();
        let bytes = Serializer::write_document(&doc).unwrap();
        assert_eq!(bytes, Serializer::render_document(&doc).into_bytes());
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(
            Serializer::render_document(&sample()),
            Serializer::render_document(&sample())
        );
    }
}
