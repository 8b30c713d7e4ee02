use crate::models::{
    payload::{Component, Language, MediaKind, Param, TemplatePayload},
    templating::{MsgTemplating, TemplateParam},
};

const BUTTON_PREFIX: &str = "button.";
const HEADER_KEY: &str = "header";

/// Compiles a validated templating definition into the provider template shape.
///
/// Components follow the order of `params`. Every element of a `button.<index>`
/// group becomes its own quick reply component. When there are no param groups
/// at all, `variables` become a single body component.
pub fn compile_template(templating: &MsgTemplating, language_code: &str) -> TemplatePayload {
    let mut components = Vec::new();

    for (key, group) in templating.params.iter() {
        if let Some(index) = key.strip_prefix(BUTTON_PREFIX) {
            components.extend(
                group
                    .iter()
                    .map(|p| Component::quick_reply(index, button_param(p))),
            );
        } else if key == HEADER_KEY {
            let header = group
                .iter()
                .fold(Component::header(), |c, p| c.with_param(header_param(p)));
            components.push(header);
        } else {
            let body = group.iter().fold(Component::body(), |c, p| {
                c.with_param(Param::typed_text(&p.param_type, &p.value))
            });
            components.push(body);
        }
    }

    if templating.params.is_empty() {
        components.push(
            templating
                .variables
                .iter()
                .fold(Component::body(), |c, v| c.with_param(Param::text(v))),
        );
    }

    TemplatePayload {
        name: templating.template.name.clone(),
        language: Language::deterministic(language_code),
        components,
    }
}

fn button_param(param: &TemplateParam) -> Param {
    if param.value.starts_with("http") {
        Param::Url(param.value.clone())
    } else {
        Param::Payload(param.value.clone())
    }
}

fn header_param(param: &TemplateParam) -> Param {
    match MediaKind::from_param_type(&param.param_type) {
        Some(kind) => Param::Media {
            kind,
            link: param.value.clone(),
        },
        None => Param::typed_text(&param.param_type, &param.value),
    }
}
