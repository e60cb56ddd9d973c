//! Entity storage and the per-turn system scheduler.
//! Entities are slotmap keys; each component type lives in its own typed
//! store inside [`World`], reached through the [`Component`] trait.

mod scheduler;
mod store;

use slotmap::SlotMap;

use crate::components::{Appearance, Blocking, Movement, Player, Position, SimpleAi};
use crate::types::EntityId;

pub use scheduler::{Scheduler, System};
pub use store::ComponentStore;

/// Binds a component type to its store inside [`World`].
pub trait Component: Sized + 'static {
    fn store(world: &World) -> &ComponentStore<Self>;
    fn store_mut(world: &mut World) -> &mut ComponentStore<Self>;
}

#[derive(Default)]
pub struct World {
    entities: SlotMap<EntityId, ()>,
    pub(crate) positions: ComponentStore<Position>,
    pub(crate) appearances: ComponentStore<Appearance>,
    pub(crate) movement: ComponentStore<Movement>,
    pub(crate) blocking: ComponentStore<Blocking>,
    pub(crate) simple_ai: ComponentStore<SimpleAi>,
    pub(crate) players: ComponentStore<Player>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_entity(&mut self) -> EntityId {
        self.entities.insert(())
    }

    pub fn delete_entity(&mut self, id: EntityId) -> bool {
        if self.entities.remove(id).is_none() {
            return false;
        }
        self.positions.remove(id);
        self.appearances.remove(id);
        self.movement.remove(id);
        self.blocking.remove(id);
        self.simple_ai.remove(id);
        self.players.remove(id);
        true
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> Vec<EntityId> {
        let mut ids: Vec<_> = self.entities.keys().collect();
        ids.sort();
        ids
    }

    /// Adds or replaces a component. Ignored for dead entities.
    pub fn insert<C: Component>(&mut self, id: EntityId, component: C) {
        if !self.is_alive(id) {
            return;
        }
        C::store_mut(self).insert(id, component);
    }

    pub fn has<C: Component>(&self, id: EntityId) -> bool {
        C::store(self).contains(id)
    }

    pub fn get<C: Component>(&self, id: EntityId) -> Option<&C> {
        C::store(self).get(id)
    }

    pub fn get_mut<C: Component>(&mut self, id: EntityId) -> Option<&mut C> {
        C::store_mut(self).get_mut(id)
    }

    /// Replaces a component the entity already carries.
    pub fn update<C: Component>(&mut self, id: EntityId, component: C) -> bool {
        match C::store_mut(self).get_mut(id) {
            Some(slot) => {
                *slot = component;
                true
            }
            None => false,
        }
    }

    pub fn remove<C: Component>(&mut self, id: EntityId) -> Option<C> {
        C::store_mut(self).remove(id)
    }

    pub fn entities_with<C: Component>(&self) -> Vec<EntityId> {
        C::store(self).ids()
    }
}
