//! Left-biased recursive union of nested mappings

use crate::{Map, Value};

/// Deep-merge two mappings, `primary` winning on every conflict.
///
/// The result's key set is the union of both inputs. A key present on both
/// sides recurses when both values are mappings; any other overlap takes
/// `primary`'s value wholesale, including when only one side is a mapping
/// (primary's shape wins). Neither input is mutated.
pub fn combine_dictionaries(primary: &Map, secondary: &Map) -> Map {
    let mut combined = primary.clone();
    for (key, secondary_value) in secondary {
        match combined.entry(key.clone()) {
            serde_json::map::Entry::Occupied(mut occupied) => {
                // recurse only when both sides are mappings; any other
                // overlap keeps primary's value as-is
                if let (Value::Object(primary_child), Value::Object(secondary_child)) =
                    (occupied.get_mut(), secondary_value)
                {
                    *primary_child = combine_dictionaries(primary_child, secondary_child);
                }
            }
            serde_json::map::Entry::Vacant(vacant) => {
                vacant.insert(secondary_value.clone());
            }
        }
    }
    combined
}

/// Value-level merge used by the resolver's fold. Both sides mappings
/// recurse through [`combine_dictionaries`]; anything else takes `primary`.
pub(crate) fn combine_values(primary: &Value, secondary: &Value) -> Value {
    match (primary, secondary) {
        (Value::Object(p), Value::Object(s)) => Value::Object(combine_dictionaries(p, s)),
        _ => primary.clone(),
    }
}
