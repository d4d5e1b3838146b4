//! Component J: the Validator Cache.
//!
//! Ported from the teacher's `cache.rs` almost unchanged: an insert-
//! once, never-evicting, concurrent-safe registry of validators keyed
//! by an arbitrary `K: Hash + Eq`, for hosts juggling more than one
//! OpenAPI document (e.g. a gateway fronting several services). The
//! teacher's two `todo!()` panics -- on file-read failure and on
//! serialization failure -- are replaced with proper error returns.

use crate::error::BuildError;
use crate::validator::OpenApiPayloadValidator;
use dashmap::{DashMap, Entry, VacantEntry};
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::hash::Hash;
use std::path::Path;
use std::sync::{Arc, OnceLock};

static GLOBAL_CACHE: OnceLock<ValidatorCollection<String>> = OnceLock::new();

pub fn global_validator_cache() -> &'static ValidatorCollection<String> {
    GLOBAL_CACHE.get_or_init(ValidatorCollection::new)
}

#[derive(Debug)]
pub enum CacheError {
    ValidatorNotFound,
    ValidatorAlreadyExists,
    Io(String),
    InvalidSpecification(String),
    FailedToCreateValidator(BuildError),
}

impl Display for CacheError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheError::ValidatorNotFound => write!(f, "validator not found in cache"),
            CacheError::ValidatorAlreadyExists => write!(f, "validator already exists in cache"),
            CacheError::Io(msg) => write!(f, "failed to read specification: {msg}"),
            CacheError::InvalidSpecification(msg) => {
                write!(f, "failed to serialize specification: {msg}")
            }
            CacheError::FailedToCreateValidator(err) => {
                write!(f, "failed to create new validator: {err}")
            }
        }
    }
}

impl std::error::Error for CacheError {}

pub struct ValidatorCollection<K> {
    cache: DashMap<K, Arc<OpenApiPayloadValidator>>,
}

impl<K> Default for ValidatorCollection<K>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ValidatorCollection<K>
where
    K: Hash + Eq,
{
    pub fn new() -> Self {
        ValidatorCollection {
            cache: DashMap::new(),
        }
    }

    pub fn insert_from_file_path<P>(
        &self,
        id: K,
        file_path: P,
    ) -> Result<Arc<OpenApiPayloadValidator>, CacheError>
    where
        P: AsRef<Path>,
    {
        let path = file_path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CacheError::Io(e.to_string()))?;
        let content: Value =
            serde_json::from_str(&content).map_err(|e| CacheError::InvalidSpecification(e.to_string()))?;
        self.insert(id, content)
    }

    pub fn insert<V>(&self, id: K, spec: V) -> Result<Arc<OpenApiPayloadValidator>, CacheError>
    where
        V: serde::Serialize,
    {
        match self.cache.entry(id) {
            Entry::Occupied(_) => Err(CacheError::ValidatorAlreadyExists),
            Entry::Vacant(entry) => Self::create_validator(entry, spec),
        }
    }

    fn create_validator<V>(
        entry: VacantEntry<K, Arc<OpenApiPayloadValidator>>,
        spec: V,
    ) -> Result<Arc<OpenApiPayloadValidator>, CacheError>
    where
        V: serde::Serialize,
    {
        let spec = serde_json::to_value(spec).map_err(|e| CacheError::InvalidSpecification(e.to_string()))?;
        match OpenApiPayloadValidator::new(spec) {
            Ok(validator) => {
                let validator = Arc::new(validator);
                entry.insert(validator.clone());
                log::debug!("inserted new validator into cache");
                Ok(validator)
            }
            Err(e) => Err(CacheError::FailedToCreateValidator(e)),
        }
    }

    pub fn get(&self, id: &K) -> Result<Arc<OpenApiPayloadValidator>, CacheError> {
        match self.cache.get(id) {
            Some(validator) => Ok(Arc::clone(validator.value())),
            None => Err(CacheError::ValidatorNotFound),
        }
    }

    pub fn remove(&self, id: &K) -> Result<(), CacheError> {
        if self.cache.remove(id).is_none() {
            return Err(CacheError::ValidatorNotFound);
        }
        Ok(())
    }

    pub fn contains(&self, id: &K) -> bool {
        self.cache.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&self) {
        self.cache.clear();
        log::debug!("cleared validator cache");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec() -> Value {
        json!({
            "openapi": "3.1.0",
            "info": {"title": "fishy", "version": "1.0.0"},
            "paths": {}
        })
    }

    #[test]
    fn insert_and_get_round_trips() {
        let cache: ValidatorCollection<String> = ValidatorCollection::new();
        assert!(cache.get(&"test".to_string()).is_err());
        let validator = cache.insert("test".to_string(), spec()).unwrap();
        assert!(!cache.is_empty());
        assert_eq!(cache.len(), 1);
        let cached = cache.get(&"test".to_string()).unwrap();
        assert!(Arc::ptr_eq(&validator, &cached));
    }

    #[test]
    fn inserting_a_duplicate_key_is_an_error() {
        let cache: ValidatorCollection<String> = ValidatorCollection::new();
        cache.insert("test".to_string(), spec()).unwrap();
        let result = cache.insert("test".to_string(), spec());
        assert!(matches!(result, Err(CacheError::ValidatorAlreadyExists)));
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache: ValidatorCollection<String> = ValidatorCollection::new();
        cache.insert("test1".to_string(), spec()).unwrap();
        cache.insert("test2".to_string(), spec()).unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn reading_a_missing_file_is_an_error() {
        let cache: ValidatorCollection<String> = ValidatorCollection::new();
        let result = cache.insert_from_file_path("test".to_string(), "/no/such/file.json");
        assert!(matches!(result, Err(CacheError::Io(_))));
    }
}
