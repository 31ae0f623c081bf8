use super::*;

#[test]
fn memory_store_round_trips_values() {
    let mut store = MemoryStore::default();
    assert_eq!(store.get("theme"), None);
    store.set("theme", "dark");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    store.set("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let mut store = BrowserStorage;
    store.set("theme", "dark");
    assert_eq!(store.get("theme"), None);
}
