//! 请求信封：每个创建 / 更新请求都把实体字段放在一个固定的顶层键下，
//! 例如 `{"component": {...}}`。
//!
//! `Post` 与 `Put` 会检查资源声明的必填字段，`Patch` 只传递调用方设置的字段。

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 可以放进请求信封的编辑投影
pub trait Resource {
    /// 信封键名
    const ENVELOPE: &'static str;

    /// 创建 / 整体替换时第一个缺失的必填字段
    fn missing_required(&self) -> Option<&'static str> {
        None
    }
}

/// 创建请求
#[derive(Debug, Clone, PartialEq)]
pub struct Post<T>(pub T);

/// 局部更新请求
#[derive(Debug, Clone, PartialEq)]
pub struct Patch<T>(pub T);

/// 整体替换请求
#[derive(Debug, Clone, PartialEq)]
pub struct Put<T>(pub T);

macro_rules! envelope_impls {
    ($wrapper:ident, $check:expr) => {
        impl<T> $wrapper<T> {
            pub fn into_inner(self) -> T {
                self.0
            }
        }

        impl<T> From<T> for $wrapper<T> {
            fn from(inner: T) -> Self {
                $wrapper(inner)
            }
        }

        impl<T: Resource + Serialize> Serialize for $wrapper<T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serialize_enveloped(&self.0, $check, serializer)
            }
        }

        impl<'de, T: Resource + Deserialize<'de>> Deserialize<'de> for $wrapper<T> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserialize_enveloped(deserializer, $check).map($wrapper)
            }
        }
    };
}

envelope_impls!(Post, true);
envelope_impls!(Patch, false);
envelope_impls!(Put, true);

fn serialize_enveloped<T, S>(inner: &T, check_required: bool, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Resource + Serialize,
    S: Serializer,
{
    if check_required {
        if let Some(field) = inner.missing_required() {
            return Err(ser::Error::custom(format_args!("missing field `{}`", field)));
        }
    }
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(T::ENVELOPE, inner)?;
    map.end()
}

fn deserialize_enveloped<'de, T, D>(deserializer: D, check_required: bool) -> Result<T, D::Error>
where
    T: Resource + Deserialize<'de>,
    D: Deserializer<'de>,
{
    let inner = deserializer.deserialize_map(EnvelopeVisitor(PhantomData))?;
    if check_required {
        if let Some(field) = T::missing_required(&inner) {
            return Err(de::Error::missing_field(field));
        }
    }
    Ok(inner)
}

struct EnvelopeVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for EnvelopeVisitor<T>
where
    T: Resource + Deserialize<'de>,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an object with a `{}` key", T::ENVELOPE)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<T, A::Error> {
        let mut inner = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == T::ENVELOPE {
                if inner.is_some() {
                    return Err(de::Error::duplicate_field(T::ENVELOPE));
                }
                inner = Some(map.next_value()?);
            } else {
                // 信封旁的其他键交给外层结构处理，这里忽略
                map.next_value::<IgnoredAny>()?;
            }
        }
        // 缺少信封键属于结构不符，不是必填字段缺失
        inner.ok_or_else(|| de::Error::custom(format_args!("expected `{}` envelope", T::ENVELOPE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use serde_json::json;

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    struct Widget {
        #[serde(default, skip_serializing_if = "Field::is_missing")]
        name: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_missing")]
        size: Field<u32>,
    }

    impl Resource for Widget {
        const ENVELOPE: &'static str = "widget";

        fn missing_required(&self) -> Option<&'static str> {
            self.name.is_missing().then_some("name")
        }
    }

    #[test]
    fn wraps_under_envelope_key() {
        let patch = Patch(Widget {
            size: 3.into(),
            ..Widget::default()
        });
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"widget": {"size": 3}})
        );
    }

    #[test]
    fn post_refuses_to_encode_without_required_field() {
        let post = Post(Widget::default());
        let err = serde_json::to_value(&post).unwrap_err();
        assert!(err.to_string().contains("missing field `name`"));

        // Patch 不检查必填字段
        assert_eq!(
            serde_json::to_value(Patch(Widget::default())).unwrap(),
            json!({"widget": {}})
        );
    }

    #[test]
    fn decoding_requires_the_envelope_key() {
        let err = serde_json::from_value::<Patch<Widget>>(json!({"size": 3})).unwrap_err();
        assert!(err.to_string().contains("expected `widget` envelope"));

        let err = serde_json::from_value::<Put<Widget>>(json!({"widget": {"size": 3}})).unwrap_err();
        assert!(err.to_string().contains("missing field `name`"));
    }

    #[test]
    fn sibling_keys_are_ignored() {
        let patch: Patch<Widget> =
            serde_json::from_value(json!({"other": [1, 2], "widget": {"name": null}})).unwrap();
        assert_eq!(patch.0.name, Field::Null);
    }
}
