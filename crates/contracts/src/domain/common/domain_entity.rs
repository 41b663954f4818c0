use super::entity_id::EntityId;

/// Корень агрегата: идентичность, патч из формы, имена для UI.
///
/// `id` присваивается один раз при создании и больше не меняется;
/// `apply_patch` обновляет только редактируемые поля.
pub trait DomainEntity: Clone {
    type Id: EntityId + PartialEq + Clone;
    type Patch;

    fn id(&self) -> Self::Id;

    /// Перенести заполненные поля патча в агрегат
    fn apply_patch(&mut self, patch: &Self::Patch);

    fn element_name() -> &'static str;

    fn list_name() -> &'static str;
}
