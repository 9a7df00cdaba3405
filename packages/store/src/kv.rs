/// Minimal string key/value storage.
///
/// Mirrors the browser `localStorage` contract: reads of missing keys return
/// `None` and writes never fail from the caller's point of view. Backends that
/// can fail (filesystem) swallow the error and behave as if the key is absent.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
