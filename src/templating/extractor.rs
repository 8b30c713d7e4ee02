use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{IgnoredAny, MapAccess, Visitor},
};
use tracing::debug;

use crate::{
    error::Result,
    models::{templating::MsgTemplating, validation::validate_templating},
};

const TEMPLATING_KEY: &str = "templating";

/// Top-level metadata document. Only `templating` is read; a repeated
/// `templating` key keeps its last value.
struct Metadata {
    templating: Option<MsgTemplating>,
}

impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct MetadataVisitor;

        impl<'de> Visitor<'de> for MetadataVisitor {
            type Value = Metadata;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a metadata object")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut templating = None;
                while let Some(key) = access.next_key::<String>()? {
                    if key == TEMPLATING_KEY {
                        templating = access.next_value::<Option<MsgTemplating>>()?;
                    } else {
                        access.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(Metadata { templating })
            }
        }

        deserializer.deserialize_map(MetadataVisitor)
    }
}

/// Decodes and validates the `templating` section of a message's metadata.
///
/// Empty metadata, a `null` document and a missing or null `templating` field
/// all yield `Ok(None)`.
pub fn extract_templating(metadata: &[u8]) -> Result<Option<MsgTemplating>> {
    if metadata.is_empty() {
        return Ok(None);
    }

    let metadata: Option<Metadata> = serde_json::from_slice(metadata)?;

    let Some(templating) = metadata.and_then(|m| m.templating) else {
        debug!("Metadata carries no templating section");
        return Ok(None);
    };

    validate_templating(&templating)?;

    debug!(
        template = %templating.template.name,
        param_groups = templating.params.len(),
        variables = templating.variables.len(),
        "Templating definition extracted"
    );

    Ok(Some(templating))
}
