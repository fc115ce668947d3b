use crate::CoreResult;

/// Durable string-valued key-value storage.
///
/// Calls are synchronous and complete before returning; a successful `set`
/// or `remove` is visible to every later `get`, including after a restart
/// for durable implementations.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> CoreResult<()>;

    /// Removing an absent key is not an error
    fn remove(&mut self, key: &str) -> CoreResult<()>;
}
