use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Entity storage backed by a flat Vec.
/// The RC car scene holds a handful of entities; linear lookup is fine.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(8),
        }
    }

    /// Add an entity to the scene. Returns its ID.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.entities.push(entity);
        id
    }

    /// Iterate over all entities in spawn order (also draw order).
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn spawn_keeps_draw_order() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.spawn(Entity::new(EntityId(7))), EntityId(7));
        scene.spawn(Entity::new(EntityId(3)));
        let ids: Vec<u32> = scene.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![7, 3]);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn find_by_tag_mut_edits_in_place() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("car"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("marker"));

        scene.find_by_tag_mut("car").unwrap().pos = Vec2::new(1.0, 2.0);
        let car = scene.iter().find(|e| e.id == EntityId(1)).unwrap();
        assert_eq!(car.pos, Vec2::new(1.0, 2.0));
        assert!(scene.find_by_tag_mut("missing").is_none());
    }
}
