//! Feed payload checking and minification.
//!
//! Captures store feed XML only: the payload must tokenize as well-formed XML
//! and its root element must be a feed root (`rss`, Atom `feed`, or RSS 1.0
//! `rdf:RDF`). HTML shells and error pages fail one of the two checks. The
//! accepted document is re-serialized with inter-element whitespace and
//! comments dropped, so byte comparison in the capture writer ignores
//! upstream formatting churn.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedXmlError {
    #[error("malformed XML: {0}")]
    Parse(String),

    #[error("root element {root:?} is not a feed")]
    NotAFeed { root: String },

    #[error("document has no root element")]
    NoRoot,

    #[error("serialize: {0}")]
    Write(String),
}

const FEED_ROOTS: [&str; 3] = ["rss", "feed", "RDF"];

/// Checks that `raw` is a well-formed feed document and returns its minified
/// serialization.
pub fn validate_and_minify(raw: &str) -> Result<String, FeedXmlError> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);

    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut saw_root = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| FeedXmlError::Parse(e.to_string()))?;
        match &event {
            Event::Eof => break,
            // Dropped from the minified output.
            Event::Comment(_) | Event::PI(_) => continue,
            Event::Start(e) | Event::Empty(e) => {
                if !saw_root {
                    let root = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                    if !FEED_ROOTS.contains(&root.as_str()) {
                        return Err(FeedXmlError::NotAFeed { root });
                    }
                    saw_root = true;
                }
            }
            _ => {}
        }
        writer
            .write_event(event)
            .map_err(|e| FeedXmlError::Write(e.to_string()))?;
    }

    if !saw_root {
        return Err(FeedXmlError::NoRoot);
    }

    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| FeedXmlError::Parse(e.to_string()))
}
