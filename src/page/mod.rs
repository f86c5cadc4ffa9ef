//! Handles for the page elements the analyzer trigger reads and writes.
//!
//! The trigger never looks elements up by itself. A [`Page`] is resolved once
//! from a [`Document`] and passed in, so any rendering surface (a browser DOM,
//! a terminal, the in-memory document in [`memory`]) can back it.

pub mod memory;

use std::sync::Arc;

use crate::error::{AppError, Result};

pub const INPUT_ID: &str = "textToAnalyze";
pub const RESPONSE_ID: &str = "system_response";
pub const SPINNER_ID: &str = "loadingSpinner";

pub const HAS_RESULT_CLASS: &str = "has-result";

pub trait InputField: Send + Sync {
    fn value(&self) -> String;
}

pub trait DisplayRegion: Send + Sync {
    fn set_inner_html(&self, html: &str);
    fn inner_html(&self) -> String;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

pub trait LoadingIndicator: Send + Sync {
    fn set_visible(&self, visible: bool);
    fn is_visible(&self) -> bool;
}

/// Blocking, user-facing warning channel (a browser `alert`, a stderr line).
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

pub trait Document {
    fn input_field(&self, id: &str) -> Option<Arc<dyn InputField>>;
    fn display_region(&self, id: &str) -> Option<Arc<dyn DisplayRegion>>;
    fn loading_indicator(&self, id: &str) -> Option<Arc<dyn LoadingIndicator>>;
}

#[derive(Clone)]
pub struct Page {
    pub input: Arc<dyn InputField>,
    pub display: Arc<dyn DisplayRegion>,
    pub spinner: Option<Arc<dyn LoadingIndicator>>,
    pub notifier: Arc<dyn Notifier>,
}

impl Page {
    /// Resolves the well-known element IDs. The spinner is optional.
    pub fn from_document(document: &dyn Document, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let input = document
            .input_field(INPUT_ID)
            .ok_or_else(|| AppError::MissingElement(INPUT_ID.to_string()))?;
        let display = document
            .display_region(RESPONSE_ID)
            .ok_or_else(|| AppError::MissingElement(RESPONSE_ID.to_string()))?;
        let spinner = document.loading_indicator(SPINNER_ID);

        if spinner.is_none() {
            log::debug!("No #{} element, loading state will not be shown", SPINNER_ID);
        }

        Ok(Page {
            input,
            display,
            spinner,
            notifier,
        })
    }

    pub(crate) fn set_loading(&self, loading: bool) {
        if let Some(spinner) = &self.spinner {
            spinner.set_visible(loading);
        }
    }

    pub(crate) fn clear_result(&self) {
        self.display.set_inner_html("");
        self.display.remove_class(HAS_RESULT_CLASS);
    }
}
