use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 局部更新字段：区分“未设置”（不改动）、“显式 null”（清空）和具体取值。
///
/// 结构体字段需配合
/// `#[serde(default, skip_serializing_if = "Field::is_missing")]` 使用，
/// 这样未设置的字段不会出现在请求体中，而 `Null` 会被写成 `null`。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field<T> {
    Missing,
    Null,
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Missing
    }
}

impl<T> Field<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn is_present(&self) -> bool {
        !self.is_missing()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T> From<Option<T>> for Field<T> {
    /// `None` 视为显式清空
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Null,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(v) => v.serialize(serializer),
            Field::Missing | Field::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // 字段缺失时由 #[serde(default)] 产生 Missing，这里只会看到 null 或取值
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(default, skip_serializing_if = "Field::is_missing")]
        description: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_missing")]
        showcase: Field<bool>,
    }

    #[test]
    fn missing_null_and_value_are_distinct_on_the_wire() {
        let missing = Sample::default();
        let cleared = Sample {
            description: Field::Null,
            ..Sample::default()
        };
        let set = Sample {
            description: "Core API".to_string().into(),
            ..Sample::default()
        };

        assert_eq!(serde_json::to_value(&missing).unwrap(), json!({}));
        assert_eq!(serde_json::to_value(&cleared).unwrap(), json!({"description": null}));
        assert_eq!(serde_json::to_value(&set).unwrap(), json!({"description": "Core API"}));
    }

    #[test]
    fn falsy_values_are_kept() {
        let sample = Sample {
            description: String::new().into(),
            showcase: false.into(),
        };
        assert_eq!(
            serde_json::to_value(&sample).unwrap(),
            json!({"description": "", "showcase": false})
        );
    }

    #[test]
    fn decoding_preserves_presence() {
        let sample: Sample = serde_json::from_value(json!({"description": null})).unwrap();
        assert_eq!(sample.description, Field::Null);
        assert_eq!(sample.showcase, Field::Missing);

        let sample: Sample = serde_json::from_value(json!({"showcase": true})).unwrap();
        assert_eq!(sample.showcase.value(), Some(&true));
        assert!(sample.description.is_missing());
    }
}
