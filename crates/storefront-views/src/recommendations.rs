//! Recommendations view: read-only list of recommended products.

use std::cell::{Ref, RefCell};
use std::future::Future;
use std::rc::Rc;

use storefront_api::{RecommendedItem, StorefrontApi, STORE_USER_ID};
use storefront_observability::StructuredLogger;

use crate::render::{render_product_cell, render_section};
use crate::{LoadState, Liveness};

/// Loads the store user's recommendations. No write operations.
#[derive(Clone)]
pub struct RecommendationsView {
    api: Rc<dyn StorefrontApi>,
    logger: StructuredLogger,
    state: Rc<RefCell<LoadState<RecommendedItem>>>,
    liveness: Liveness,
}

impl RecommendationsView {
    /// Create an unmounted recommendations view.
    pub fn new(api: Rc<dyn StorefrontApi>, logger: &StructuredLogger) -> Self {
        Self {
            api,
            logger: logger.with_component("recommendations"),
            state: Rc::new(RefCell::new(LoadState::Unloaded)),
            liveness: Liveness::new(),
        }
    }

    /// Current load state.
    pub fn state(&self) -> Ref<'_, LoadState<RecommendedItem>> {
        self.state.borrow()
    }

    /// True iff a recommendation list has been applied.
    pub fn is_loaded(&self) -> bool {
        self.state.borrow().is_loaded()
    }

    /// Start the first load. Only the first call on a live view fetches.
    pub fn mount(&self) -> impl Future<Output = ()> + 'static {
        let start = self.liveness.is_alive() && {
            let mut state = self.state.borrow_mut();
            let unloaded = matches!(*state, LoadState::Unloaded);
            if unloaded {
                *state = LoadState::Loading;
            }
            unloaded
        };
        let view = self.clone();
        async move {
            if start {
                view.fetch().await;
            }
        }
    }

    /// Re-read the list. A failure leaves the current state untouched.
    pub fn refresh(&self) -> impl Future<Output = ()> + 'static {
        let start = self.liveness.is_alive();
        if start && !self.state.borrow().is_loaded() {
            *self.state.borrow_mut() = LoadState::Loading;
        }
        let view = self.clone();
        async move {
            if start {
                view.fetch().await;
            }
        }
    }

    /// Tear the view down.
    pub fn unmount(&self) {
        self.liveness.end();
        self.logger.debug("Recommendations view unmounted");
    }

    async fn fetch(&self) {
        let result = self.api.list_recommendations(STORE_USER_ID).await;

        if !self.liveness.is_alive() {
            self.logger
                .debug("Discarding recommendations for unmounted view");
            return;
        }

        match result {
            Ok(items) => {
                self.logger
                    .info_builder("Recommendations loaded")
                    .field_i64("count", items.len() as i64)
                    .emit();
                *self.state.borrow_mut() = LoadState::Loaded(items);
            }
            Err(e) => {
                self.logger
                    .warn_builder("Failed to load recommendations")
                    .field("error", e.to_string())
                    .emit();
                let mut state = self.state.borrow_mut();
                if !state.is_loaded() {
                    *state = LoadState::Failed(e.to_string());
                }
            }
        }
    }

    /// Render the recommendations section.
    pub fn render(&self) -> String {
        let state = self.state.borrow();
        render_section("recommendations", &state, |item: &RecommendedItem| {
            render_product_cell(item.id, &item.name, &item.description)
        })
    }
}
