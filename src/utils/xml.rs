//! Generic XML to JSON tree conversion.
//!
//! Converts an XML document into a [`serde_json::Value`] without any schema
//! knowledge: child elements become object keys, attributes become `@name`
//! keys, and text content becomes either a plain string (for leaf elements)
//! or a `#text` key (for elements that also carry attributes or children).
//! Repeated sibling tags are aggregated into an array; a tag that appears
//! once stays a bare value.

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

/// Errors produced while converting an XML document to a JSON tree.
#[derive(Debug, thiserror::Error)]
pub enum XmlTreeError {
    /// Malformed XML markup
    #[error("malformed XML: {0}")]
    Malformed(#[from] quick_xml::Error),

    /// Malformed attribute syntax
    #[error("malformed attribute: {0}")]
    Attr(#[from] AttrError),

    /// Document ended inside an open element
    #[error("unexpected end of document")]
    UnexpectedEof,
}

/// Parse an XML document into a generic JSON tree.
///
/// The result is an object keyed by the document's root element name(s).
/// Namespace prefixes are kept as part of the key (e.g. `arxiv:comment`).
pub fn xml_to_value(xml: &str) -> Result<Value, XmlTreeError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut root = Map::new();
    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = element_name(&start);
                let value = read_element(&mut reader, &start)?;
                insert_child(&mut root, name, value);
            }
            Event::Empty(start) => {
                let name = element_name(&start);
                let value = empty_element(&start)?;
                insert_child(&mut root, name, value);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(Value::Object(root))
}

/// Read the content of an element whose start tag has just been consumed.
fn read_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Value, XmlTreeError> {
    let mut map = attribute_map(start)?;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(child) => {
                let name = element_name(&child);
                let value = read_element(reader, &child)?;
                insert_child(&mut map, name, value);
            }
            Event::Empty(child) => {
                let name = element_name(&child);
                let value = empty_element(&child)?;
                insert_child(&mut map, name, value);
            }
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(t) => text.push_str(&String::from_utf8_lossy(&t.into_inner())),
            Event::End(_) => break,
            Event::Eof => return Err(XmlTreeError::UnexpectedEof),
            _ => {}
        }
    }

    if map.is_empty() {
        if text.is_empty() {
            Ok(Value::Null)
        } else {
            Ok(Value::String(text))
        }
    } else {
        if !text.is_empty() {
            map.insert("#text".to_string(), Value::String(text));
        }
        Ok(Value::Object(map))
    }
}

/// Value for a self-closing element: its attributes, or null if it has none.
fn empty_element(start: &BytesStart) -> Result<Value, XmlTreeError> {
    let map = attribute_map(start)?;
    if map.is_empty() {
        Ok(Value::Null)
    } else {
        Ok(Value::Object(map))
    }
}

fn attribute_map(start: &BytesStart) -> Result<Map<String, Value>, XmlTreeError> {
    let mut map = Map::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = format!("@{}", String::from_utf8_lossy(attr.key.as_ref()));
        let value = attr.unescape_value()?.into_owned();
        map.insert(key, Value::String(value));
    }
    Ok(map)
}

fn element_name(start: &BytesStart) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

/// Add a child value under `name`, turning repeated tags into an array.
fn insert_child(map: &mut Map<String, Value>, name: String, value: Value) {
    match map.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(name, value);
        }
    }
}
