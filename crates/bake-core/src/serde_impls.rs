//! Serde support for plain prop data.
//!
//! Element kinds serialize as their name and nodes as `{ kind, props }`;
//! neither can be deserialized. `Undefined` and `Null` both serialize as null
//! and null deserializes as `Null`.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::props::{PropValue, Props};

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropValue::Undefined => serializer.serialize_none(),
            PropValue::Null => serializer.serialize_unit(),
            PropValue::Bool(b) => serializer.serialize_bool(*b),
            PropValue::Number(n) => serializer.serialize_f64(*n),
            PropValue::String(s) => serializer.serialize_str(s),
            PropValue::List(items) => items.serialize(serializer),
            PropValue::Map(props) => props.serialize(serializer),
            PropValue::Kind(kind) => serializer.serialize_str(kind.name()),
            PropValue::Node(node) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("kind", node.kind.name())?;
                map.serialize_entry("props", &node.props)?;
                map.end()
            }
        }
    }
}

impl Serialize for Props {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PropValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Props {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = IndexMap::<String, PropValue>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

struct PropValueVisitor;

impl<'de> Visitor<'de> for PropValueVisitor {
    type Value = PropValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a prop value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<PropValue, E> {
        Ok(PropValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<PropValue, E> {
        Ok(PropValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<PropValue, D::Error> {
        PropValue::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<PropValue, E> {
        Ok(PropValue::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<PropValue, E> {
        Ok(PropValue::Number(n as f64))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<PropValue, E> {
        Ok(PropValue::Number(n as f64))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<PropValue, E> {
        Ok(PropValue::Number(n))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<PropValue, E> {
        Ok(PropValue::String(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<PropValue, E> {
        Ok(PropValue::String(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<PropValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(PropValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PropValue, A::Error> {
        let mut props = Props::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, PropValue>()? {
            props.insert(key, value);
        }
        Ok(PropValue::Map(props))
    }
}
