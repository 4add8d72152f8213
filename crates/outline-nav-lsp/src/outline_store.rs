//! Latest outline per document, fed by server notifications.

use crate::outline_json::{outline_from_value, outline_from_value_utf16};
use outline_nav::{LineIndex, OutlineNode, OutlineProvider};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Notification the Dart analysis server sends whenever a file's outline changes.
pub const PUBLISH_OUTLINE: &str = "dart/textDocument/publishOutline";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced while accepting outline notifications.
pub enum OutlineError {
    #[error("missing or invalid field '{0}' in outline notification")]
    /// A required field was absent or had the wrong type.
    MissingField(&'static str),

    #[error("outline for {uri} has no valid root node")]
    /// The payload's root node could not be parsed.
    InvalidOutline {
        /// Document the payload was published for.
        uri: String,
    },
}

/// Keeps the most recent outline payload of each open document.
///
/// Payloads are stored raw and parsed on every [`OutlineProvider::outline_for`] call, so each
/// command sees a tree built from the latest notification and nothing is cached across commands.
///
/// Document text is tracked separately from outlines: it usually arrives first (on open) and
/// outlives [`OutlineStore::clear`].
#[derive(Default)]
pub struct OutlineStore {
    outlines: HashMap<String, Value>,
    texts: HashMap<String, LineIndex>,
    utf16_columns: bool,
}

impl OutlineStore {
    /// Create an empty store whose payloads carry character columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store whose payloads carry UTF-16 columns.
    ///
    /// Columns are converted through the text registered with [`OutlineStore::set_text`]; until
    /// a document has text, its columns are used as-is.
    pub fn with_utf16_columns() -> Self {
        Self {
            utf16_columns: true,
            ..Self::default()
        }
    }

    /// Store `payload` (the `outline` object) for `uri`, replacing any previous one.
    pub fn publish(&mut self, uri: impl Into<String>, payload: Value) -> Result<(), OutlineError> {
        let uri = uri.into();
        if outline_from_value(&payload).is_none() {
            return Err(OutlineError::InvalidOutline { uri });
        }
        debug!(uri = %uri, "outline published");
        self.outlines.insert(uri, payload);
        Ok(())
    }

    /// Register the current text of `uri` for UTF-16 column conversion.
    ///
    /// May be called before or after the document's first outline is published.
    pub fn set_text(&mut self, uri: impl Into<String>, text: &str) {
        self.texts.insert(uri.into(), LineIndex::from_text(text));
    }

    /// Forget the text of `uri` (e.g. when the document closes).
    pub fn remove_text(&mut self, uri: &str) {
        self.texts.remove(uri);
    }

    /// Handle a server notification.
    ///
    /// Returns `Ok(true)` if the notification was an outline publication and was stored,
    /// `Ok(false)` if it was some other method.
    pub fn handle_notification(
        &mut self,
        method: &str,
        params: &Value,
    ) -> Result<bool, OutlineError> {
        if method != PUBLISH_OUTLINE {
            return Ok(false);
        }
        let uri = params
            .get("uri")
            .and_then(Value::as_str)
            .ok_or(OutlineError::MissingField("uri"))?;
        let outline = params
            .get("outline")
            .filter(|outline| outline.is_object())
            .ok_or(OutlineError::MissingField("outline"))?;

        self.publish(uri, outline.clone()).inspect_err(|err| {
            warn!(error = %err, "dropping outline notification");
        })?;
        Ok(true)
    }

    /// Forget the outline of `uri`; its registered text is kept.
    pub fn clear(&mut self, uri: &str) {
        self.outlines.remove(uri);
    }

    /// Returns `true` if an outline is stored for `uri`.
    pub fn contains(&self, uri: &str) -> bool {
        self.outlines.contains_key(uri)
    }

    /// Number of documents with a stored outline.
    pub fn len(&self) -> usize {
        self.outlines.len()
    }

    /// Returns `true` if no outline is stored.
    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }
}

impl OutlineProvider for OutlineStore {
    fn outline_for(&self, document_id: &str) -> Option<OutlineNode> {
        let payload = self.outlines.get(document_id)?;
        match self.texts.get(document_id).filter(|_| self.utf16_columns) {
            Some(line_index) => outline_from_value_utf16(line_index, payload),
            None => outline_from_value(payload),
        }
    }
}
