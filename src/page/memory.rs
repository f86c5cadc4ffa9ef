use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{
    DisplayRegion, Document, InputField, LoadingIndicator, Notifier, INPUT_ID, RESPONSE_ID,
    SPINNER_ID,
};

#[derive(Debug, Default)]
struct ElementState {
    value: String,
    inner_html: String,
    classes: BTreeSet<String>,
    visible: bool,
}

/// A shared element. Clones refer to the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    state: Arc<Mutex<ElementState>>,
}

impl MemoryElement {
    fn state(&self) -> MutexGuard<'_, ElementState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.state().value = value.into();
    }
}

impl InputField for MemoryElement {
    fn value(&self) -> String {
        self.state().value.clone()
    }
}

impl DisplayRegion for MemoryElement {
    fn set_inner_html(&self, html: &str) {
        self.state().inner_html = html.to_string();
    }

    fn inner_html(&self) -> String {
        self.state().inner_html.clone()
    }

    fn add_class(&self, class: &str) {
        self.state().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.state().classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.state().classes.contains(class)
    }
}

impl LoadingIndicator for MemoryElement {
    fn set_visible(&self, visible: bool) {
        self.state().visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.state().visible
    }
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: Mutex<HashMap<String, MemoryElement>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input field, display region and spinner under their usual IDs.
    pub fn standard() -> Self {
        let document = Self::new();
        document.insert(INPUT_ID);
        document.insert(RESPONSE_ID);
        document.insert(SPINNER_ID);
        document
    }

    /// Adds (or replaces) an element and returns a handle to it.
    pub fn insert(&self, id: &str) -> MemoryElement {
        let element = MemoryElement::default();
        self.elements().insert(id.to_string(), element.clone());
        element
    }

    pub fn get(&self, id: &str) -> Option<MemoryElement> {
        self.elements().get(id).cloned()
    }

    fn elements(&self) -> MutexGuard<'_, HashMap<String, MemoryElement>> {
        self.elements.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Document for MemoryDocument {
    fn input_field(&self, id: &str) -> Option<Arc<dyn InputField>> {
        self.get(id).map(|e| Arc::new(e) as Arc<dyn InputField>)
    }

    fn display_region(&self, id: &str) -> Option<Arc<dyn DisplayRegion>> {
        self.get(id).map(|e| Arc::new(e) as Arc<dyn DisplayRegion>)
    }

    fn loading_indicator(&self, id: &str) -> Option<Arc<dyn LoadingIndicator>> {
        self.get(id).map(|e| Arc::new(e) as Arc<dyn LoadingIndicator>)
    }
}

/// Records alerts instead of blocking on them.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    alerts: Mutex<Vec<String>>,
}

impl MemoryNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Notifier for MemoryNotifier {
    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let document = MemoryDocument::standard();
        let handle = document.get(RESPONSE_ID).unwrap();
        let region = document.display_region(RESPONSE_ID).unwrap();

        region.set_inner_html("<b>hi</b>");
        region.add_class("has-result");
        assert_eq!(handle.inner_html(), "<b>hi</b>");
        assert!(handle.has_class("has-result"));

        region.remove_class("has-result");
        assert!(!handle.has_class("has-result"));
    }

    #[test]
    fn test_notifier_records_alerts() {
        let notifier = MemoryNotifier::default();
        notifier.alert("first");
        notifier.alert("second");
        assert_eq!(notifier.alerts(), vec!["first", "second"]);
    }
}
