use serde::{Serialize, Serializer, ser::SerializeMap};

pub const LANGUAGE_POLICY: &str = "deterministic";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub policy: String,
    pub code: String,
}

impl Language {
    pub fn deterministic(code: impl Into<String>) -> Self {
        Self {
            policy: LANGUAGE_POLICY.to_string(),
            code: code.into(),
        }
    }
}

/// Compiled template ready to be embedded in a provider request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplatePayload {
    pub name: String,
    pub language: Language,
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Header,
    Body,
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSubType {
    QuickReply,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub component_type: ComponentType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<ButtonSubType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,

    #[serde(rename = "parameters")]
    pub params: Vec<Param>,
}

impl Component {
    pub fn header() -> Self {
        Self::new(ComponentType::Header)
    }

    pub fn body() -> Self {
        Self::new(ComponentType::Body)
    }

    pub fn quick_reply(index: impl Into<String>, param: Param) -> Self {
        Self {
            component_type: ComponentType::Button,
            sub_type: Some(ButtonSubType::QuickReply),
            index: Some(index.into()),
            params: vec![param],
        }
    }

    fn new(component_type: ComponentType) -> Self {
        Self {
            component_type,
            sub_type: None,
            index: None,
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Document,
}

impl MediaKind {
    pub fn from_param_type(param_type: &str) -> Option<Self> {
        match param_type {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            "document" => Some(MediaKind::Document),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Document => "document",
        }
    }
}

/// A single component parameter. Exactly one value kind per parameter;
/// the flat provider shape is produced by the `Serialize` impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// Text value. `kind` is the declared type, passed through to the wire.
    Text { kind: String, text: String },
    Url(String),
    Payload(String),
    Media { kind: MediaKind, link: String },
}

impl Param {
    pub fn text(text: impl Into<String>) -> Self {
        Param::Text {
            kind: "text".to_string(),
            text: text.into(),
        }
    }

    pub fn typed_text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Param::Text {
            kind: kind.into(),
            text: text.into(),
        }
    }

    pub fn param_type(&self) -> &str {
        match self {
            Param::Text { kind, .. } => kind,
            Param::Url(_) => "url",
            Param::Payload(_) => "payload",
            Param::Media { kind, .. } => kind.as_str(),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Param::Text { text, .. } => text,
            Param::Url(url) => url,
            Param::Payload(payload) => payload,
            Param::Media { link, .. } => link,
        }
    }
}

#[derive(Serialize)]
struct MediaLink<'a> {
    link: &'a str,
}

impl Serialize for Param {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.param_type())?;
        match self {
            Param::Text { text, .. } => map.serialize_entry("text", text)?,
            Param::Url(url) => map.serialize_entry("text", url)?,
            Param::Payload(payload) => map.serialize_entry("payload", payload)?,
            Param::Media { kind, link } => {
                map.serialize_entry(kind.as_str(), &MediaLink { link })?
            }
        }
        map.end()
    }
}
