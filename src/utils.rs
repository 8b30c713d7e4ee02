use anyhow::{Context, Error, Result};
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    models::{
        message::{OutgoingMessage, TemplateMessage},
        templating::MsgTemplating,
    },
    templating::{compile_template, extract_templating},
};

/// Picks the template language: the definition's own language, then the
/// message locale, then the configured default.
pub fn resolve_language<'a>(
    templating: &'a MsgTemplating,
    locale: Option<&'a str>,
    default_language: &'a str,
) -> &'a str {
    [Some(templating.language.as_str()), locale]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|code| !code.is_empty())
        .unwrap_or(default_language)
}

pub fn process_message(payload: &str, config: &Config) -> Result<Option<TemplateMessage>, Error> {
    debug!("Raw payload: {}", payload);
    let message = serde_json::from_str::<OutgoingMessage>(payload)
        .context("Failed to decode outgoing message")?;

    info!(
        trace_id = %message.trace_id,
        recipient = %message.recipient,
        "Processing outgoing message"
    );

    let templating = match extract_templating(message.metadata_bytes()) {
        Ok(Some(templating)) => templating,
        Ok(None) => {
            info!(trace_id = %message.trace_id, "Message has no templating, skipping");
            return Ok(None);
        }
        Err(e) => {
            warn!(
                trace_id = %message.trace_id,
                error = %e,
                validation = e.is_validation(),
                "Rejected templating definition"
            );
            return Err(e.into());
        }
    };

    let language = resolve_language(
        &templating,
        message.locale.as_deref(),
        &config.default_language,
    );

    let template = compile_template(&templating, language);

    info!(
        trace_id = %message.trace_id,
        template = %template.name,
        language = %template.language.code,
        components = template.components.len(),
        "Template payload compiled"
    );

    Ok(Some(TemplateMessage::new(message.recipient, template)))
}
