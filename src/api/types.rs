//! Payload types for the attachment endpoints
//!
//! The remote API owns these schemas; everything beyond the identifier is
//! carried through untouched so response shape changes upstream don't break
//! callers here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// A file or link attached to a business transaction.
///
/// Only `id` is interpreted locally (it keys the table endpoint); all other
/// fields pass through as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// OCR/AI-extracted table data for an attachment, returned verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentTable(pub Value);

/// Decode a list response, accepting either a bare array or an object
/// wrapping the array under `attachments`. Any other body shape surfaces
/// as a decode error rather than an empty list.
pub(crate) fn parse_attachment_list(body: Value) -> Result<Vec<Attachment>> {
    let items = match body {
        Value::Object(mut map) if map.contains_key("attachments") => {
            map.remove("attachments").unwrap_or(Value::Null)
        }
        other => other,
    };
    Ok(serde_json::from_value(items)?)
}
