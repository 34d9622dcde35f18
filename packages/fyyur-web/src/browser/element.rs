use crate::dom::Element;

impl Element for web_sys::Element {
    fn element_id(&self) -> Option<String> {
        let id = web_sys::Element::id(self);
        (!id.is_empty()).then_some(id)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn data_attr(&self, key: &str) -> Option<String> {
        self.get_attribute(&format!("data-{key}"))
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }

    fn same_as(&self, other: &Self) -> bool {
        self == other
    }
}
