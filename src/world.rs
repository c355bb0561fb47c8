// src/world.rs

// Any: 具体的な型を隠蔽して扱えるようにするやつ。
// TypeId: 型ごとにユニークなID。これで ComponentStorage を型安全に管理する！
use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::component::{Component, ComponentStorage};
use crate::entity::Entity;

/// World（ワールド）は、シーンの全てのエンティティとコンポーネントを管理する中心的な存在だよ！
/// シーンが World を一つだけ持っていて、毎フレームのシステムはこれを通してデータを読み書きする。
#[derive(Default)]
pub struct World {
    // キー: コンポーネントの型を示す TypeId。
    // 値: Box<dyn Any> に隠蔽した ComponentStorage<T>。
    pub(crate) components: HashMap<TypeId, Box<dyn Any>>,
    pub(crate) next_entity_id: usize,
}

impl World {
    pub fn new() -> Self {
        World {
            components: HashMap::new(),
            next_entity_id: 0,
        }
    }

    // --- Entity Management ---

    /// 新しいエンティティを作成するよ。ID は 0 から始まる連番！🔢
    pub fn create_entity(&mut self) -> Entity {
        let entity_id = self.next_entity_id;
        self.next_entity_id += 1;
        log::debug!("World: Entity {} created.", entity_id);
        Entity(entity_id)
    }

    // --- Component Management ---

    fn get_storage<T: Component>(&self) -> Option<&ComponentStorage<T>> {
        self.components
            .get(&TypeId::of::<T>())
            // `dyn Any` で隠蔽された元の型にダウンキャスト！🪄 型が違えば None。
            .and_then(|storage_any| storage_any.downcast_ref::<ComponentStorage<T>>())
    }

    fn get_storage_mut<T: Component>(&mut self) -> Option<&mut ComponentStorage<T>> {
        self.components
            .get_mut(&TypeId::of::<T>())
            .and_then(|storage_any| storage_any.downcast_mut::<ComponentStorage<T>>())
    }

    /// コンポーネント型を World に登録するよ。
    ///
    /// もし既に登録済みの型なら、何もしない（中身も消さない）。
    pub fn register_component<T: Component>(&mut self) {
        self.components
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ComponentStorage::<T>::new()));
    }

    pub fn is_registered<T: Component>(&self) -> bool {
        self.components.contains_key(&TypeId::of::<T>())
    }

    /// エンティティにコンポーネントを追加するよ（同じ型があれば上書き）。
    ///
    /// 未登録の型だった場合はその場でストレージを作るので、登録忘れでも落ちないよ。
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.is_registered::<T>() {
            log::warn!(
                "World: {} was not registered before add_component. Registering now.",
                std::any::type_name::<T>()
            );
            self.register_component::<T>();
        }
        if let Some(storage) = self.get_storage_mut::<T>() {
            storage.insert(entity, component);
        }
    }

    /// # 戻り値
    /// - `Some(&T)`: コンポーネントが見つかった場合。
    /// - `None`: 持っていない、または型が登録されていない場合。
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.get_storage::<T>().and_then(|storage| storage.get(entity))
    }

    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.get_storage_mut::<T>()
            .and_then(|storage| storage.get_mut(entity))
    }

    /// 指定された型の ComponentStorage への参照を直接取得するよ（読み取り専用）。
    /// システムが特定のコンポーネント群をまとめて処理したい場合に便利！
    pub fn storage<T: Component>(&self) -> Option<&ComponentStorage<T>> {
        self.get_storage::<T>()
    }

    pub fn storage_mut<T: Component>(&mut self) -> Option<&mut ComponentStorage<T>> {
        self.get_storage_mut::<T>()
    }

    /// 指定された型のコンポーネントを持つ全てのエンティティ (ID 順)。
    pub fn get_all_entities_with_component<T: Component>(&self) -> Vec<Entity> {
        self.storage::<T>()
            .map(|storage| storage.entities())
            .unwrap_or_default()
    }
}
