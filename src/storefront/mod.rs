//! Client-side storefront state: cart counter, navigation drawer and chat
//! widget. Each is a plain state object with its storage or transport
//! injected, so the page behaviour can run outside a browser.

pub mod cart;
pub mod nav;
pub mod transport;
pub mod widget;

/// How the current page was reached, as reported by the browser's
/// navigation timing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Navigate,
    Reload,
    BackForward,
}
