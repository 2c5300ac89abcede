pub mod collision_detector;
pub mod entity;
pub mod session;
pub mod spawner;
pub mod world;

pub use collision_detector::CollisionDetector;
pub use entity::{Entity, EntityId, EntityKind, Velocity};
pub use session::{GamePhase, Session};
pub use spawner::Spawner;
pub use world::World;
