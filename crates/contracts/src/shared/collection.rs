//! In-memory коллекция одной разновидности агрегата.
//!
//! Единственная поверхность записи для данных страницы: вставка,
//! патч по id, удаление по id. Все операции синхронные и тотальные —
//! обновление/удаление отсутствующего id молча игнорируется.

use crate::domain::common::DomainEntity;

#[derive(Debug, Clone, PartialEq)]
pub struct EntityCollection<T: DomainEntity> {
    items: Vec<T>,
}

impl<T: DomainEntity> Default for EntityCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DomainEntity> EntityCollection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == *id)
    }

    /// Заменить всё содержимое (загрузка с мок-эндпоинта)
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Добавить агрегат в конец; id уже сгенерирован конструктором
    pub fn insert(&mut self, entity: T) {
        self.items.push(entity);
    }

    /// Применить патч к агрегату с данным id.
    /// Отсутствующий id — no-op, возвращает false.
    pub fn update(&mut self, id: &T::Id, patch: &T::Patch) -> bool {
        match self.items.iter_mut().find(|item| item.id() == *id) {
            Some(item) => {
                item.apply_patch(patch);
                true
            }
            None => false,
        }
    }

    /// Удалить агрегат с данным id.
    /// Отсутствующий id — no-op, возвращает false.
    pub fn remove(&mut self, id: &T::Id) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != *id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::{User, UserDto, UserId};
    use crate::enums::{EntityStatus, UserRole};
    use chrono::NaiveDate;

    fn user(name: &str, email: &str) -> User {
        User::new_for_insert(
            &UserDto {
                name: Some(name.to_string()),
                email: Some(email.to_string()),
                role: Some(UserRole::User),
                status: Some(EntityStatus::Active),
            },
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    fn seeded() -> EntityCollection<User> {
        EntityCollection::from_items(vec![
            user("John Doe", "john@example.com"),
            user("Jane Smith", "jane@example.com"),
        ])
    }

    #[test]
    fn test_insert_appends() {
        let mut col = seeded();
        col.insert(user("Bob Johnson", "bob@example.com"));
        assert_eq!(col.len(), 3);
        assert_eq!(col.items()[2].name, "Bob Johnson");
    }

    #[test]
    fn test_inserted_ids_are_unique() {
        let mut col = EntityCollection::new();
        for i in 0..10 {
            col.insert(user(&format!("User {}", i), "u@example.com"));
        }
        for a in 0..col.len() {
            for b in (a + 1)..col.len() {
                assert_ne!(col.items()[a].id, col.items()[b].id);
            }
        }
    }

    #[test]
    fn test_update_merges_patch() {
        let mut col = seeded();
        let id = col.items()[0].id;

        let found = col.update(
            &id,
            &UserDto {
                role: Some(UserRole::Manager),
                ..Default::default()
            },
        );

        assert!(found);
        assert_eq!(col.items()[0].role, UserRole::Manager);
        // untouched fields survive
        assert_eq!(col.items()[0].name, "John Doe");
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let mut col = seeded();
        let snapshot = col.clone();

        let found = col.update(
            &UserId::new_v4(),
            &UserDto {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        );

        assert!(!found);
        assert_eq!(col, snapshot);
    }

    #[test]
    fn test_remove_by_id() {
        let mut col = seeded();
        let id = col.items()[0].id;

        assert!(col.remove(&id));
        assert_eq!(col.len(), 1);
        assert!(col.get(&id).is_none());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut col = seeded();
        let snapshot = col.clone();

        assert!(!col.remove(&UserId::new_v4()));
        assert_eq!(col, snapshot);
    }
}
