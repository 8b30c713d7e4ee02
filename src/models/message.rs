use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::models::payload::TemplatePayload;

/// Outbound message as handed over by the sending side.
#[derive(Debug, Deserialize)]
pub struct OutgoingMessage {
    pub trace_id: String,
    pub recipient: String,

    #[serde(default)]
    pub locale: Option<String>,

    /// Raw metadata document, kept verbatim so key order survives decoding.
    #[serde(default)]
    pub metadata: Option<Box<RawValue>>,
}

impl OutgoingMessage {
    pub fn metadata_bytes(&self) -> &[u8] {
        self.metadata
            .as_deref()
            .map(|raw| raw.get().as_bytes())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessagingProduct {
    Whatsapp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Template,
}

/// Provider request body for a template message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateMessage {
    pub messaging_product: MessagingProduct,
    pub recipient_type: String,
    pub to: String,

    #[serde(rename = "type")]
    pub message_type: MessageType,

    pub template: TemplatePayload,
}

impl TemplateMessage {
    pub fn new(to: impl Into<String>, template: TemplatePayload) -> Self {
        Self {
            messaging_product: MessagingProduct::Whatsapp,
            recipient_type: "individual".to_string(),
            to: to.into(),
            message_type: MessageType::Template,
            template,
        }
    }
}
