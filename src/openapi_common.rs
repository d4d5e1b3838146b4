pub mod extensions {
    use serde::de::Deserializer;
    use serde::ser::Serializer;
    use serde::{Deserialize, Serialize};
    use serde_json::Value;
    use std::collections::HashMap;

    pub fn serialize<S>(extensions: &HashMap<String, Value>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let filtered: HashMap<_, _> = extensions
            .iter()
            .filter(|(k, _)| k.starts_with("x-"))
            .collect();

        filtered.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<String, Value>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = HashMap::<String, Value>::deserialize(deserializer)?;
        map.retain(|k, _| k.starts_with("x-"));
        Ok(map)
    }
}
