// src/component.rs

use std::collections::HashMap;

use crate::entity::Entity;

/// Component（コンポーネント）トレイトだよ！
///
/// 構造体がシーンのコンポーネントとして使われる資格があることを示すマーカー。
/// `std::fmt::Debug` はデバッグ出力 (`{:?}`) できるようにするため。
pub trait Component: std::fmt::Debug + 'static {}

/// ComponentStorage（コンポーネントストレージ）だよ！
/// 特定種類のコンポーネントを `HashMap<Entity, T>` でまとめて保存・管理する箱！📦
#[derive(Debug)]
pub struct ComponentStorage<T: Component> {
    components: HashMap<Entity, T>,
}

impl<T: Component> ComponentStorage<T> {
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// エンティティにコンポーネントを追加・更新するよ！(上書き)
    pub fn insert(&mut self, entity: Entity, component: T) {
        self.components.insert(entity, component);
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.components.get(&entity)
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.components.get_mut(&entity)
    }

    /// 格納されているエンティティ ID の一覧。順番は ID 順にそろえて返すよ。
    pub fn entities(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self.components.keys().copied().collect();
        entities.sort();
        entities
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Entity, &mut T)> {
        self.components.iter_mut()
    }
}

impl<T: Component> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Marker(u8);
    impl Component for Marker {}

    #[test]
    fn insert_overwrites_existing_component() {
        let mut storage = ComponentStorage::<Marker>::new();
        assert!(storage.components.is_empty());

        storage.insert(Entity(3), Marker(1));
        storage.insert(Entity(3), Marker(2)); // 上書き！
        assert_eq!(storage.components.len(), 1);
        assert_eq!(storage.get(Entity(3)), Some(&Marker(2)));
        assert_eq!(storage.get(Entity(4)), None);
    }

    #[test]
    fn iter_mut_touches_every_component() {
        let mut storage = ComponentStorage::<Marker>::new();
        storage.insert(Entity(0), Marker(1));
        storage.insert(Entity(1), Marker(2));
        for (_entity, marker) in storage.iter_mut() {
            marker.0 *= 10;
        }
        assert_eq!(storage.get(Entity(0)), Some(&Marker(10)));
        assert_eq!(storage.get_mut(Entity(1)).map(|m| m.0), Some(20));
    }

    #[test]
    fn entities_are_sorted_by_id() {
        let mut storage = ComponentStorage::<Marker>::new();
        storage.insert(Entity(5), Marker(0));
        storage.insert(Entity(1), Marker(0));
        storage.insert(Entity(3), Marker(0));
        assert_eq!(storage.entities(), vec![Entity(1), Entity(3), Entity(5)]);
    }
}
