//! In-memory element tree for hosts without a browser DOM

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use super::Element;

/// Error type for tree mutations that would break the hierarchy
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("cannot append <{0}> to itself")]
    SelfAppend(String),

    #[error("cannot append <{0}> inside its own descendant")]
    AncestorAppend(String),
}

#[derive(Default)]
struct Attributes {
    id: Option<String>,
    classes: Vec<String>,
    data: HashMap<String, String>,
}

struct Node {
    tag: String,
    attributes: RefCell<Attributes>,
    parent: RefCell<Weak<Node>>,
    children: RefCell<Vec<MemoryElement>>,
}

/// A reference-counted element handle. Clones point at the same node.
///
/// Parents are held weakly, so the caller keeps the root alive.
#[derive(Clone)]
pub struct MemoryElement(Rc<Node>);

impl MemoryElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Rc::new(Node {
            tag: tag.into(),
            attributes: RefCell::new(Attributes::default()),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
        }))
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.0.attributes.borrow_mut().id = Some(id.into());
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.0.attributes.borrow_mut().classes.push(class.into());
        self
    }

    /// Set `data-{key}`; `key` is given without the `data-` prefix
    pub fn with_data(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_data(key, value);
        self
    }

    pub fn set_data(&self, key: impl Into<String>, value: impl Into<String>) {
        self.0
            .attributes
            .borrow_mut()
            .data
            .insert(key.into(), value.into());
    }

    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    /// Attach `child` as the last child, detaching it from any previous parent.
    ///
    /// Fails if `child` is this element or one of its ancestors.
    pub fn append_child(&self, child: &MemoryElement) -> Result<(), HierarchyError> {
        if child.same_as(self) {
            return Err(HierarchyError::SelfAppend(child.tag().to_string()));
        }
        if self.ancestors().any(|ancestor| ancestor.same_as(child)) {
            return Err(HierarchyError::AncestorAppend(child.tag().to_string()));
        }

        child.detach();
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
        Ok(())
    }

    fn ancestors(&self) -> impl Iterator<Item = MemoryElement> {
        std::iter::successors(self.parent(), |el| el.parent())
    }

    /// Remove this element from its parent
    pub fn detach(&self) {
        let parent = self.0.parent.borrow().upgrade();
        if let Some(parent) = parent {
            parent
                .children
                .borrow_mut()
                .retain(|c| !Rc::ptr_eq(&c.0, &self.0));
        }
        *self.0.parent.borrow_mut() = Weak::new();
    }

    pub fn children(&self) -> Vec<MemoryElement> {
        self.0.children.borrow().clone()
    }
}

impl Element for MemoryElement {
    fn element_id(&self) -> Option<String> {
        self.0
            .attributes
            .borrow()
            .id
            .clone()
            .filter(|id| !id.is_empty())
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.attributes.borrow().classes.iter().any(|c| c == class)
    }

    fn data_attr(&self, key: &str) -> Option<String> {
        self.0.attributes.borrow().data.get(key).cloned()
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent.borrow().upgrade().map(MemoryElement)
    }

    fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attributes = self.0.attributes.borrow();
        f.debug_struct("MemoryElement")
            .field("tag", &self.0.tag)
            .field("id", &attributes.id)
            .field("classes", &attributes.classes)
            .finish_non_exhaustive()
    }
}
