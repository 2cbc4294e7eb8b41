// src/ecs/world_tests.rs
// World のユニットテスト！

use super::component::Component;
use super::entity::Entity;
use super::world::World;

// --- テスト用のダミーコンポーネント ---

#[derive(Debug, Clone, Copy, PartialEq)]
struct Marker {
    value: i32,
}
impl Component for Marker {}

#[derive(Debug, Clone, PartialEq)]
struct Label(String);
impl Component for Label {}

#[test]
fn create_entities_gives_sequential_ids() {
    let mut world = World::new();
    let e1 = world.create_entity();
    let e2 = world.create_entity();
    let e3 = world.create_entity();

    assert_eq!(e1, Entity(0));
    assert_eq!(e2, Entity(1));
    assert_eq!(e3, Entity(2));
    assert!([e1, e2, e3].iter().all(|&e| world.is_entity_alive(e)));
    assert!(!world.is_entity_alive(Entity(3)), "まだ発行してない ID");
}

#[test]
fn add_and_get_component() {
    let mut world = World::new();
    let entity = world.create_entity();

    assert!(world.add_component(entity, Marker { value: 7 }));
    assert_eq!(world.get_component::<Marker>(entity), Some(&Marker { value: 7 }));
    // 付けてない型は None
    assert!(world.get_component::<Label>(entity).is_none());
}

#[test]
fn add_component_overwrites_existing_value() {
    let mut world = World::new();
    let entity = world.create_entity();
    world.add_component(entity, Marker { value: 1 });
    world.add_component(entity, Marker { value: 2 });

    assert_eq!(world.get_component::<Marker>(entity).map(|m| m.value), Some(2));
}

#[test]
fn get_component_mut_changes_value() {
    let mut world = World::new();
    let entity = world.create_entity();
    world.add_component(entity, Label("before".to_string()));

    if let Some(label) = world.get_component_mut::<Label>(entity) {
        label.0 = "after".to_string();
    }
    assert_eq!(world.get_component::<Label>(entity), Some(&Label("after".to_string())));
}

#[test]
fn remove_component_returns_value() {
    let mut world = World::new();
    let entity = world.create_entity();
    world.add_component(entity, Marker { value: 5 });

    assert_eq!(world.remove_component::<Marker>(entity), Some(Marker { value: 5 }));
    assert!(world.get_component::<Marker>(entity).is_none());
    assert_eq!(world.remove_component::<Marker>(entity), None, "2 回目は何も残ってないはず");
}

#[test]
fn destroy_entity_removes_all_components() {
    let mut world = World::new();
    let keep = world.create_entity();
    let gone = world.create_entity();
    world.add_component(keep, Marker { value: 1 });
    world.add_component(gone, Marker { value: 2 });
    world.add_component(gone, Label("bye".to_string()));

    assert!(world.destroy_entity(gone));
    assert!(!world.is_entity_alive(gone));
    assert!(world.get_component::<Marker>(gone).is_none());
    assert!(world.get_component::<Label>(gone).is_none());
    assert_eq!(world.get_component::<Marker>(keep), Some(&Marker { value: 1 }));

    assert!(!world.destroy_entity(gone), "破棄済みエンティティの再破棄は false");
}

#[test]
fn cannot_add_component_to_dead_entity() {
    let mut world = World::new();
    let entity = world.create_entity();
    world.destroy_entity(entity);

    assert!(!world.add_component(entity, Marker { value: 9 }));
    assert!(world.get_component::<Marker>(entity).is_none());
}

#[test]
fn entities_with_component_are_sorted_and_alive_only() {
    let mut world = World::new();
    let entities: Vec<Entity> = (0..5).map(|_| world.create_entity()).collect();
    for &e in entities.iter().rev() {
        world.add_component(e, Marker { value: e.0 as i32 });
    }
    world.destroy_entity(entities[2]);

    let found = world.get_all_entities_with_component::<Marker>();
    assert_eq!(found, vec![Entity(0), Entity(1), Entity(3), Entity(4)]);
    assert!(world.get_all_entities_with_component::<Label>().is_empty(), "未登録の型は空っぽ");
}
