use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::debug;

use super::{ClassicSnakeMap, EmptyMap, GameMap, StandardMap};
use crate::errors::{Result, RulesError};

/// Builds one of the maps that ship with this crate
pub type MapConstructor = fn() -> Box<dyn GameMap>;

fn classic_snake() -> Box<dyn GameMap> {
    Box::new(ClassicSnakeMap)
}

fn standard() -> Box<dyn GameMap> {
    Box::new(StandardMap)
}

fn empty() -> Box<dyn GameMap> {
    Box::new(EmptyMap)
}

/// Registered in this order by [MapRegistry::builtin]
pub const BUILTIN_MAPS: &[MapConstructor] = &[classic_snake, standard, empty];

/// Maps by id. Build it once at startup, then only read from it.
#[derive(Debug, Default)]
pub struct MapRegistry {
    maps: FxHashMap<String, Box<dyn GameMap>>,
}

impl MapRegistry {
    /// a registry with no maps in it
    pub fn new() -> Self {
        Self::default()
    }

    /// a registry holding every map in [BUILTIN_MAPS]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for constructor in BUILTIN_MAPS {
            registry
                .register_map(constructor())
                .expect("builtin map ids are unique");
        }
        registry
    }

    /// add a map under its own id, refusing to replace an existing one
    pub fn register_map(&mut self, map: Box<dyn GameMap>) -> Result<()> {
        let id = map.id();
        if self.maps.contains_key(id) {
            return Err(RulesError::DuplicateMap(id.to_string()));
        }
        debug!(id, "registered map");
        self.maps.insert(id.to_string(), map);
        Ok(())
    }

    #[allow(missing_docs)]
    pub fn get_map(&self, id: &str) -> Result<&dyn GameMap> {
        self.maps
            .get(id)
            .map(|m| &**m)
            .ok_or_else(|| RulesError::MapNotFound(id.to_string()))
    }

    /// registered ids, sorted
    pub fn list(&self) -> Vec<&str> {
        self.maps.keys().map(|k| k.as_str()).sorted().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_maps() {
        let registry = MapRegistry::builtin();
        assert_eq!(registry.list(), vec!["classic_snake", "empty", "standard"]);
        assert_eq!(
            registry.get_map("classic_snake").unwrap().meta().name,
            "Classic Snake"
        );
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let ids: Vec<&str> = BUILTIN_MAPS.iter().map(|c| c().id()).collect();
        assert_eq!(ids.iter().unique().count(), ids.len(), "{:?}", ids);
        assert_eq!(MapRegistry::builtin().list().len(), BUILTIN_MAPS.len());
    }

    #[test]
    fn test_unknown_map() {
        let registry = MapRegistry::builtin();
        assert_eq!(
            registry.get_map("royale").unwrap_err(),
            RulesError::MapNotFound("royale".to_string())
        );
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = MapRegistry::new();
        registry.register_map(Box::new(ClassicSnakeMap)).unwrap();
        assert_eq!(
            registry.register_map(Box::new(ClassicSnakeMap)),
            Err(RulesError::DuplicateMap("classic_snake".to_string()))
        );
        assert_eq!(registry.list(), vec!["classic_snake"]);
    }
}
