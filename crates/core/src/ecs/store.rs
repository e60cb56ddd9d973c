//! Typed per-component storage keyed by entity.

use slotmap::SecondaryMap;

use crate::types::EntityId;

pub struct ComponentStore<T> {
    items: SecondaryMap<EntityId, T>,
}

impl<T> Default for ComponentStore<T> {
    fn default() -> Self {
        Self { items: SecondaryMap::new() }
    }
}

impl<T> ComponentStore<T> {
    pub fn insert(&mut self, id: EntityId, value: T) -> Option<T> {
        self.items.insert(id, value)
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.items.get(id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.items.get_mut(id)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        self.items.remove(id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.items.contains_key(id)
    }

    /// Entity ids carrying this component, sorted so callers iterate
    /// deterministically.
    pub fn ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<_> = self.items.keys().collect();
        ids.sort();
        ids
    }
}
