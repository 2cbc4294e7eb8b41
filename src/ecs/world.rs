// src/ecs/world.rs

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// コンポーネントストレージと、その型専用のお掃除関数をセットにしたもの。
///
/// `storage` の中身は `HashMap<Entity, T>` を `Box<dyn Any>` で型消去したもの。
/// `remover` は `T` を知っている関数ポインタで、`destroy_entity` から
/// 型を知らないまま削除できるようにするために持っているよ。
struct ComponentStoreEntry {
    storage: Box<dyn Any>,
    remover: fn(&mut Box<dyn Any>, Entity),
}

/// ゲーム世界の全てのエンティティとコンポーネントを管理する構造体 (自作 ECS のコア)。
///
/// 生存しているエンティティの集合と、コンポーネントの型 (`TypeId`) ごとの
/// ストレージを持つ。カード 1 枚がエンティティ 1 つに対応する。
#[derive(Default)]
pub struct World {
    /// 現在生存しているエンティティ。
    entities: HashSet<Entity>,
    /// 次に発行するエンティティ ID。
    next_entity_id: usize,
    /// 型ごとのストレージ。
    component_stores: HashMap<TypeId, ComponentStoreEntry>,
}

impl World {
    /// 空の World を作る。
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいエンティティを発行して生存リストに入れる。ID は 0 からの連番。
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(entity);
        entity
    }

    /// エンティティが生きているか。
    pub fn is_entity_alive(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// エンティティを破棄して、付いていたコンポーネントも全部消す。🧹
    ///
    /// 存在しないエンティティを渡したら `false`。
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if !self.entities.remove(&entity) {
            warn!("World: Attempted to destroy non-existent entity {:?}", entity);
            return false;
        }
        for entry in self.component_stores.values_mut() {
            (entry.remover)(&mut entry.storage, entity);
        }
        true
    }

    /// コンポーネントの型を登録する。2 回目以降の登録は何もしない。
    ///
    /// `add_component` も未登録なら自動で呼ぶので、明示的に呼ぶのは
    /// 「まだ誰も持っていないけど問い合わせはしたい」型だけで OK。
    pub fn register_component<T: Component>(&mut self) {
        let type_id = TypeId::of::<T>();
        if self.component_stores.contains_key(&type_id) {
            return;
        }
        debug!("World: Registering component type {}", std::any::type_name::<T>());

        let remover: fn(&mut Box<dyn Any>, Entity) = |storage_any, entity| {
            if let Some(storage) = storage_any.downcast_mut::<HashMap<Entity, T>>() {
                storage.remove(&entity);
            }
        };
        self.component_stores.insert(
            type_id,
            ComponentStoreEntry {
                storage: Box::new(HashMap::<Entity, T>::new()),
                remover,
            },
        );
    }

    /// エンティティにコンポーネントを付ける。同じ型が既にあれば上書き。
    ///
    /// 死んでいるエンティティには付けない (`false` を返す)。
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> bool {
        if !self.is_entity_alive(entity) {
            warn!(
                "World: Tried to add {} to dead entity {:?}",
                std::any::type_name::<T>(),
                entity
            );
            return false;
        }
        self.register_component::<T>();
        match self.typed_storage_mut::<T>() {
            Some(storage) => {
                storage.insert(entity, component);
                true
            }
            None => false,
        }
    }

    /// 読み取り専用でコンポーネントを取る。
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.typed_storage::<T>()
            .and_then(|storage| storage.get(&entity))
    }

    /// 書き込み可能でコンポーネントを取る。
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.typed_storage_mut::<T>()
            .and_then(|storage| storage.get_mut(&entity))
    }

    /// コンポーネントを外して返す。
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.typed_storage_mut::<T>()
            .and_then(|storage| storage.remove(&entity))
    }

    /// 指定した型のコンポーネントを持つ、生きているエンティティを ID 順で返す。
    pub fn get_all_entities_with_component<T: Component>(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self
            .typed_storage::<T>()
            .map(|storage| {
                storage
                    .keys()
                    .copied()
                    .filter(|e| self.is_entity_alive(*e))
                    .collect()
            })
            .unwrap_or_default();
        // HashMap の順番はバラバラなので、呼び出し側が決定的に動けるようにソートしておく
        entities.sort();
        entities
    }

    fn typed_storage<T: Component>(&self) -> Option<&HashMap<Entity, T>> {
        self.component_stores
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_ref::<HashMap<Entity, T>>())
    }

    fn typed_storage_mut<T: Component>(&mut self) -> Option<&mut HashMap<Entity, T>> {
        self.component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_mut::<HashMap<Entity, T>>())
    }
}
