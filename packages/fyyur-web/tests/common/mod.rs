// Common test utilities: fake window, fake server, and a results page

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use fyyur_web::dom::{Delegator, MemoryElement};
use fyyur_web::{
    bind_page_handlers, DeleteOutcome, PageCommand, PageHost, PageRuntime, VenueApi, VenueTarget,
};

/// Records everything the runtime asks the window to do
#[derive(Default)]
pub struct FakeHost {
    pub locations: RefCell<Vec<String>>,
    pub prompts: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
    answer: Cell<bool>,
}

impl FakeHost {
    pub fn answering(answer: bool) -> Self {
        let host = Self::default();
        host.answer.set(answer);
        host
    }

    pub fn locations(&self) -> Vec<String> {
        self.locations.borrow().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl PageHost for FakeHost {
    fn replace_location(&self, path: &str) {
        self.locations.borrow_mut().push(path.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Answers deletes from a script, recording the ids it was asked for
#[derive(Default)]
pub struct FakeApi {
    pub deleted: RefCell<Vec<String>>,
    outcomes: RefCell<VecDeque<DeleteOutcome>>,
}

impl FakeApi {
    pub fn returning(outcomes: impl IntoIterator<Item = DeleteOutcome>) -> Self {
        Self {
            deleted: RefCell::new(Vec::new()),
            outcomes: RefCell::new(outcomes.into_iter().collect()),
        }
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.borrow().clone()
    }
}

#[async_trait(?Send)]
impl VenueApi for FakeApi {
    async fn delete_venue(&self, venue: &VenueTarget) -> DeleteOutcome {
        self.deleted.borrow_mut().push(venue.id.clone());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or(DeleteOutcome::Success)
    }
}

/// A results page: body > table > rows, with the page handlers bound to body
pub struct Page {
    pub body: MemoryElement,
    pub table: MemoryElement,
    pub delegator: Delegator<MemoryElement, PageCommand>,
    pub runtime: PageRuntime<FakeHost, FakeApi>,
}

impl Page {
    pub fn new(host: FakeHost, api: FakeApi) -> Self {
        let body = MemoryElement::new("body");
        let table = MemoryElement::new("table");
        body.append_child(&table).expect("Failed to build page");

        let mut delegator = Delegator::new(body.clone());
        bind_page_handlers(&mut delegator);

        Self {
            body,
            table,
            delegator,
            runtime: PageRuntime::new(host, api),
        }
    }

    /// Append a row holding `control` to the results table
    pub fn insert_row(&self, control: &MemoryElement) {
        let row = MemoryElement::new("tr");
        let cell = MemoryElement::new("td");
        row.append_child(&cell).expect("Failed to build row");
        cell.append_child(control).expect("Failed to attach control");
        self.table.append_child(&row).expect("Failed to insert row");
    }

    pub fn host(&self) -> &FakeHost {
        self.runtime.host()
    }

    pub fn api(&self) -> &FakeApi {
        self.runtime.api()
    }
}

pub fn edit_venue_button(id: &str) -> MemoryElement {
    MemoryElement::new("button")
        .with_id("edit-venue")
        .with_data("id", id)
}

pub fn edit_artist_button(id: &str) -> MemoryElement {
    MemoryElement::new("button")
        .with_id("edit-artist")
        .with_data("id", id)
}

pub fn delete_venue_button(id: &str, name: &str) -> MemoryElement {
    MemoryElement::new("button")
        .with_class("btn")
        .with_class("venue-btn-delete")
        .with_data("id", id)
        .with_data("name", name)
}
