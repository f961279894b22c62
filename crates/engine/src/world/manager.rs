use std::collections::HashMap;

use super::entity::{Entity, EntityId, EntityIdAllocator};

/// Owns every entity. New entities wait in a pending list and inactive ones
/// stay in place until [`EntityManager::update`], so systems can scan the
/// population without it changing under them.
#[derive(Debug, Default)]
pub struct EntityManager {
    allocator: EntityIdAllocator,
    entities: Vec<Entity>,
    pending: Vec<Entity>,
    by_tag: HashMap<String, Vec<EntityId>>,
}

impl EntityManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a component-less entity. The returned id resolves through
    /// [`EntityManager::find_entity_mut`] right away, before the flush.
    pub fn create_entity(&mut self, tag: &str) -> EntityId {
        let id = self.allocator.allocate();
        self.pending.push(Entity::new(id, tag));
        id
    }

    /// Flushes pending entities into storage and the tag index, then prunes
    /// every inactive entity from both.
    pub fn update(&mut self) {
        for entity in self.pending.drain(..) {
            self.by_tag
                .entry(entity.tag().to_string())
                .or_default()
                .push(entity.id());
            self.entities.push(entity);
        }

        if self.entities.iter().all(Entity::is_active) {
            return;
        }

        let mut removed = Vec::new();
        self.entities.retain(|entity| {
            if entity.is_active() {
                true
            } else {
                removed.push(entity.id());
                false
            }
        });
        removed.sort_unstable();
        for bucket in self.by_tag.values_mut() {
            bucket.retain(|id| removed.binary_search(id).is_err());
        }
    }

    pub fn clear(&mut self) {
        self.entities.clear();
        self.pending.clear();
        self.by_tag.clear();
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn entities_by_tag(&self, tag: &str) -> &[EntityId] {
        self.by_tag.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn find_entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities
            .iter()
            .chain(self.pending.iter())
            .find(|entity| entity.id() == id)
    }

    pub fn find_entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities
            .iter_mut()
            .chain(self.pending.iter_mut())
            .find(|entity| entity.id() == id)
    }

    /// Marks an entity for removal at the next update.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        match self.find_entity_mut(id) {
            Some(entity) => {
                entity.destroy();
                true
            }
            None => false,
        }
    }
}
