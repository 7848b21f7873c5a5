use crate::error::{GatewayError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;

/// Flattened content of a SOAP response body.
#[derive(Debug, Default, PartialEq)]
pub struct ParsedReply {
    /// Every leaf element under `Body`, keyed by its snake_cased local name.
    pub fields: HashMap<String, String>,
    /// Whether the body carried a `Fault` element.
    pub fault: bool,
}

struct Open {
    name: String,
    has_children: bool,
}

/// Parses a SOAP envelope, ignoring namespaces and the header.
///
/// Leaf values are kept verbatim; only whitespace-only text between elements is
/// dropped. A fault's `detail` is recorded as the text of its whole subtree.
pub fn parse(xml: &str) -> Result<ParsedReply> {
    let mut reader = Reader::from_str(xml);

    let mut reply = ParsedReply::default();
    let mut stack: Vec<Open> = Vec::new();
    let mut text = String::new();
    let mut saw_body = false;
    // Depth of the open fault `detail` element, while inside one.
    let mut detail_depth: Option<usize> = None;
    let mut detail = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.has_children = true;
                }
                if detail_depth.is_none() && in_body(&stack) {
                    if name == "Fault" {
                        reply.fault = true;
                    } else if name == "detail" && in_fault(&stack) {
                        detail_depth = Some(stack.len());
                        detail.clear();
                    }
                }
                stack.push(Open {
                    name,
                    has_children: false,
                });
                text.clear();
            }
            Event::Empty(e) => {
                if let Some(parent) = stack.last_mut() {
                    parent.has_children = true;
                }
                if detail_depth.is_none()
                    && e.local_name().as_ref() == b"detail"
                    && in_fault(&stack)
                {
                    reply.fields.insert("detail".to_string(), String::new());
                }
            }
            Event::Text(t) => {
                if t.iter().all(u8::is_ascii_whitespace) {
                    continue;
                }
                let value = t.unescape()?;
                if detail_depth.is_some() {
                    detail.push_str(&value);
                } else {
                    text.push_str(&value);
                }
            }
            Event::CData(c) => {
                let value = String::from_utf8_lossy(&c);
                if detail_depth.is_some() {
                    detail.push_str(&value);
                } else {
                    text.push_str(&value);
                }
            }
            Event::End(_) => {
                let Some(open) = stack.pop() else {
                    return Err(GatewayError::Protocol("Unbalanced response XML".to_string()));
                };
                if let Some(depth) = detail_depth {
                    if stack.len() == depth {
                        reply
                            .fields
                            .insert("detail".to_string(), std::mem::take(&mut detail));
                        detail_depth = None;
                    }
                } else if open.name == "Body" {
                    saw_body = true;
                } else if !open.has_children && in_body(&stack) && !text.is_empty() {
                    reply.fields.insert(underscore(&open.name), text.clone());
                }
                text.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_body {
        return Err(GatewayError::Protocol(
            "Response does not contain a SOAP Body".to_string(),
        ));
    }
    Ok(reply)
}

fn in_fault(stack: &[Open]) -> bool {
    stack.iter().any(|open| open.name == "Fault")
}

fn in_body(stack: &[Open]) -> bool {
    stack.iter().any(|open| open.name == "Body")
}

/// Converts a CamelCase element name to snake_case, keeping acronyms together:
/// `TransactionID` -> `transaction_id`, `AVSCode` -> `avs_code`.
pub fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let after_word = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            let ends_acronym = prev.is_ascii_uppercase() && next_lower;
            if after_word || ends_acronym {
                out.push('_');
            }
        }
        match c {
            '-' => out.push('_'),
            c => out.push(c.to_ascii_lowercase()),
        }
    }
    out
}
