use super::NavigationKind;
use std::collections::HashMap;

pub const STORAGE_KEY: &str = "fram_cart_count";

/// Classes whose elements count as "add to cart" buttons, on both the
/// landing page and the products page.
pub const ADD_BUTTON_CLASSES: &[&str] = &["product-add", "produce-add"];

/// String key-value storage the counter persists through (`localStorage`
/// in the browser).
pub trait CounterStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl CounterStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Cart badge counter.
#[derive(Debug)]
pub struct CartCounter<S: CounterStore> {
    store: S,
    displayed: String,
}

impl<S: CounterStore> CartCounter<S> {
    /// Initialise on page load. A full reload empties the cart; ordinary
    /// navigation and back/forward restores keep it.
    pub fn load(mut store: S, navigation: NavigationKind) -> Self {
        if navigation == NavigationKind::Reload {
            store.remove(STORAGE_KEY);
        }

        let mut counter = Self {
            store,
            displayed: String::new(),
        };
        let count = counter.count();
        counter.set_count(count);
        counter
    }

    /// Stored count; anything unparseable or negative reads as zero.
    pub fn count(&self) -> u64 {
        self.store
            .get(STORAGE_KEY)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| n as u64)
            .unwrap_or(0)
    }

    /// Text currently shown in the cart badge.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// Delegated click handler. `path` is the class attribute of the click
    /// target followed by each ancestor's; returns whether the count changed.
    pub fn handle_click<'a, I>(&mut self, path: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if !path.into_iter().any(is_add_button) {
            return false;
        }
        let next = self.count().saturating_add(1);
        self.set_count(next);
        true
    }

    pub fn reset(&mut self) {
        self.set_count(0);
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn set_count(&mut self, n: u64) {
        self.displayed = n.to_string();
        self.store.set(STORAGE_KEY, self.displayed.clone());
    }
}

fn is_add_button(class_attr: &str) -> bool {
    class_attr
        .split_whitespace()
        .any(|class| ADD_BUTTON_CLASSES.contains(&class))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> CartCounter<MemoryStore> {
        CartCounter::load(MemoryStore::default(), NavigationKind::Navigate)
    }

    #[test]
    fn three_clicks_show_three() {
        let mut cart = fresh();
        assert_eq!(cart.displayed(), "0");

        for _ in 0..3 {
            assert!(cart.handle_click(["product-add btn"]));
        }
        assert_eq!(cart.displayed(), "3");
        assert_eq!(cart.into_store().get(STORAGE_KEY).as_deref(), Some("3"));
    }

    #[test]
    fn reload_resets_but_navigation_keeps_count() {
        let mut cart = fresh();
        cart.handle_click(["produce-add"]);
        cart.handle_click(["produce-add"]);

        let kept = CartCounter::load(cart.into_store(), NavigationKind::BackForward);
        assert_eq!(kept.displayed(), "2");

        let kept = CartCounter::load(kept.into_store(), NavigationKind::Navigate);
        assert_eq!(kept.displayed(), "2");

        let reloaded = CartCounter::load(kept.into_store(), NavigationKind::Reload);
        assert_eq!(reloaded.displayed(), "0");
    }

    #[test]
    fn click_inside_button_counts_via_ancestor() {
        let mut cart = fresh();
        assert!(cart.handle_click(["icon", "label", "card__btn produce-add"]));
        assert_eq!(cart.displayed(), "1");
    }

    #[test]
    fn unrelated_click_is_ignored() {
        let mut cart = fresh();
        assert!(!cart.handle_click(["nav-toggle", "site-header"]));
        assert!(!cart.handle_click(["product-added-banner"]));
        assert_eq!(cart.displayed(), "0");
    }

    #[test]
    fn garbage_in_storage_reads_as_zero() {
        for raw in ["-4", "abc", "NaN", "Infinity", ""] {
            let mut store = MemoryStore::default();
            store.set(STORAGE_KEY, raw.to_string());

            let cart = CartCounter::load(store, NavigationKind::Navigate);
            assert_eq!(cart.displayed(), "0", "stored: {raw:?}");
        }
    }

    #[test]
    fn reset_sets_zero() {
        let mut cart = fresh();
        cart.handle_click(["product-add"]);
        cart.reset();
        assert_eq!(cart.displayed(), "0");
        assert_eq!(cart.count(), 0);
    }
}
