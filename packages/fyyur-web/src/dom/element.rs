//! Element abstraction shared by the browser and in-memory trees

/// The read-only view of an element that delegation and the page handlers need.
///
/// Implemented for `web_sys::Element` under the `web` feature and for
/// [`MemoryElement`](super::MemoryElement) everywhere.
pub trait Element: Clone {
    /// The element's `id` attribute, if set and non-empty
    fn element_id(&self) -> Option<String>;

    /// Whether `class` appears in the element's class list
    fn has_class(&self, class: &str) -> bool;

    /// Value of the `data-{key}` attribute
    fn data_attr(&self, key: &str) -> Option<String>;

    /// Parent element, `None` at the top of the tree
    fn parent(&self) -> Option<Self>;

    /// Node identity (not structural equality)
    fn same_as(&self, other: &Self) -> bool;
}
