use std::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer,
    de::{DeserializeSeed, MapAccess, Visitor},
};

/// Provider-side template identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TemplateRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(
        default,
        rename = "uuid",
        alias = "identifier",
        deserialize_with = "null_as_default"
    )]
    pub identifier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TemplateParam {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub param_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

/// Templating intent carried in a message's metadata under `templating`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MsgTemplating {
    #[serde(default, deserialize_with = "null_as_default")]
    pub template: TemplateRef,

    #[serde(default, deserialize_with = "null_as_default")]
    pub namespace: String,

    #[serde(default, deserialize_with = "null_items_as_default")]
    pub variables: Vec<String>,

    #[serde(default)]
    pub params: ParamGroups,

    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
}

/// Parameter groups keyed by `header`, `button.<index>` or anything else (body).
///
/// Groups keep the order they appear in the source document so the compiled
/// component order is reproducible. A repeated key replaces the earlier group
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamGroups(Vec<(String, Vec<TemplateParam>)>);

impl ParamGroups {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, group: Vec<TemplateParam>) {
        let key = key.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = group,
            None => self.0.push((key, group)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TemplateParam])> {
        self.0
            .iter()
            .map(|(key, group)| (key.as_str(), group.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<TemplateParam>)> for ParamGroups {
    fn from_iter<I: IntoIterator<Item = (K, Vec<TemplateParam>)>>(iter: I) -> Self {
        let mut groups = ParamGroups::new();
        for (key, group) in iter {
            groups.insert(key, group);
        }
        groups
    }
}

impl<'de> Deserialize<'de> for ParamGroups {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = ParamGroups;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of parameter groups")
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(ParamGroups::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut groups = ParamGroups::new();
                while let Some(key) = access.next_key::<String>()? {
                    let group = access.next_value_seed(NullItems::<TemplateParam>::new())?;
                    groups.insert(key, group);
                }
                Ok(groups)
            }
        }

        deserializer.deserialize_any(GroupsVisitor)
    }
}

/// Decodes an optional list whose `null` items become `T::default()`.
struct NullItems<T>(PhantomData<T>);

impl<T> NullItems<T> {
    fn new() -> Self {
        Self(PhantomData)
    }
}

impl<'de, T: Default + Deserialize<'de>> DeserializeSeed<'de> for NullItems<T> {
    type Value = Vec<T>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Vec<T>, D::Error> {
        let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
        Ok(items
            .unwrap_or_default()
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect())
    }
}

fn null_items_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    NullItems::<T>::new().deserialize(deserializer)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(param_type: &str, value: &str) -> TemplateParam {
        TemplateParam {
            param_type: param_type.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn params_keep_document_order() {
        let templating: MsgTemplating = serde_json::from_str(
            r#"{
                "template": {"name": "welcome", "uuid": "abc"},
                "params": {
                    "zeta": [{"type": "text", "value": "z"}],
                    "header": [{"type": "image", "value": "http://img"}],
                    "button.0": [{"type": "url", "value": "http://x"}]
                }
            }"#,
        )
        .unwrap();

        let keys: Vec<&str> = templating.params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "header", "button.0"]);
    }

    #[test]
    fn repeated_key_replaces_group_in_place() {
        let groups: ParamGroups = serde_json::from_str(
            r#"{
                "body": [{"type": "text", "value": "first"}],
                "header": [],
                "body": [{"type": "text", "value": "second"}]
            }"#,
        )
        .unwrap();

        assert_eq!(groups.len(), 2);
        let keys: Vec<&str> = groups.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["body", "header"]);
        let (_, body) = groups.iter().next().unwrap();
        assert_eq!(body, &[param("text", "second")][..]);
    }

    #[test]
    fn null_collections_decode_as_empty() {
        let templating: MsgTemplating = serde_json::from_str(
            r#"{"template": {"name": "n", "uuid": "u"}, "params": null, "variables": null}"#,
        )
        .unwrap();

        assert!(templating.params.is_empty());
        assert!(templating.variables.is_empty());
    }

    #[test]
    fn null_items_decode_as_zero_values() {
        let templating: MsgTemplating = serde_json::from_str(
            r#"{
                "template": {"name": "n", "uuid": "u"},
                "variables": ["a", null],
                "params": {"body": [null, {"type": "text", "value": "Hi"}]}
            }"#,
        )
        .unwrap();

        assert_eq!(templating.variables, vec!["a", ""]);
        let (_, body) = templating.params.iter().next().unwrap();
        assert_eq!(body, &[param("", ""), param("text", "Hi")][..]);
    }

    #[test]
    fn identifier_alias_is_accepted() {
        let template: TemplateRef =
            serde_json::from_str(r#"{"name": "n", "identifier": "id-1"}"#).unwrap();

        assert_eq!(template.identifier, "id-1");
    }
}
