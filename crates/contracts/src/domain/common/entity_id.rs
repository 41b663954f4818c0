/// Trait для типизированных идентификаторов агрегатов
pub trait EntityId: Sized {
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}
