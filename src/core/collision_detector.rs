use crate::core::entity::{Entity, EntityId};

pub struct CollisionDetector;

impl CollisionDetector {
    pub fn is_relevant_for_collision(a: &Entity, b: &Entity) -> bool {
        a.solid && b.solid && a.id != b.id
    }

    pub fn overlaps(a: &Entity, b: &Entity) -> bool {
        Self::is_relevant_for_collision(a, b) && a.bounds().overlaps(&b.bounds())
    }

    /// First obstacle, in spawn order, that strictly overlaps the player.
    pub fn first_collision<'a, I>(player: &Entity, obstacles: I) -> Option<EntityId>
    where
        I: IntoIterator<Item = &'a Entity>,
    {
        obstacles
            .into_iter()
            .find(|obstacle| Self::overlaps(player, obstacle))
            .map(|obstacle| obstacle.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::EntityKind;
    use crate::geometry::Position;
    use proptest::prelude::*;

    fn entity(id: u32, x: f32, y: f32, w: f32, h: f32) -> Entity {
        let kind = if id == 0 { EntityKind::Player } else { EntityKind::Obstacle };
        Entity::new(EntityId(id), kind, Position::new(x, y), w, h)
    }

    #[test]
    fn reports_first_overlap_in_order() {
        let player = entity(0, 100.0, 200.0, 40.0, 64.0);
        let obstacles = vec![
            entity(1, 0.0, 0.0, 50.0, 50.0),
            entity(2, 120.0, 180.0, 50.0, 50.0),
            entity(3, 110.0, 210.0, 50.0, 50.0),
        ];
        assert_eq!(CollisionDetector::first_collision(&player, &obstacles), Some(EntityId(2)));
    }

    #[test]
    fn touching_is_not_a_collision() {
        let player = entity(0, 100.0, 200.0, 40.0, 64.0);
        let above = entity(1, 100.0, 150.0, 50.0, 50.0);
        let beside = entity(2, 140.0, 200.0, 50.0, 50.0);
        assert_eq!(CollisionDetector::first_collision(&player, [&above, &beside]), None);
    }

    #[test]
    fn non_solid_entities_are_ignored() {
        let player = entity(0, 100.0, 200.0, 40.0, 64.0);
        let mut ghost = entity(1, 100.0, 200.0, 50.0, 50.0);
        ghost.solid = false;
        assert!(!CollisionDetector::overlaps(&player, &ghost));
        assert!(!CollisionDetector::overlaps(&player, &player));
    }

    proptest! {
        #[test]
        fn detection_is_symmetric(
            ax in -100.0f32..400.0, ay in -100.0f32..400.0,
            bx in -100.0f32..400.0, by in -100.0f32..400.0,
            aw in 1.0f32..80.0, ah in 1.0f32..80.0,
            bw in 1.0f32..80.0, bh in 1.0f32..80.0,
        ) {
            let a = entity(0, ax, ay, aw, ah);
            let b = entity(1, bx, by, bw, bh);
            prop_assert_eq!(CollisionDetector::overlaps(&a, &b), CollisionDetector::overlaps(&b, &a));
        }
    }
}
