//! Catalog view: product listing plus a rating control per product.

use std::cell::{Ref, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use storefront_api::{
    ApiError, Product, ProductId, Rating, RatingSubmission, StorefrontApi, DEFAULT_PRODUCT_LIMIT,
    STORE_USER_ID,
};
use storefront_observability::StructuredLogger;

use crate::rating::{RatingCallback, RatingControl};
use crate::render::{render_product_cell, render_section};
use crate::{LoadState, Liveness, ViewError};

/// One rendered catalog row.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub product: Product,
    pub control: RatingControl,
}

/// Writes ratings. Holds no view state, so controls can keep it alive
/// without keeping the catalog alive.
#[derive(Clone)]
struct RatingWriter {
    api: Rc<dyn StorefrontApi>,
    logger: StructuredLogger,
}

impl RatingWriter {
    async fn submit(&self, product_id: ProductId, rating: Rating) -> Result<(), ApiError> {
        let submission = RatingSubmission::new(product_id, rating);
        let result = self.api.submit_rating(STORE_USER_ID, submission).await;

        match &result {
            Ok(()) => self
                .logger
                .info_builder("Rating submitted")
                .field_i64("product_id", product_id.get())
                .field_i64("rating", rating.value() as i64)
                .emit(),
            Err(e) => {
                let builder = self
                    .logger
                    .warn_builder("Failed to submit rating")
                    .field_i64("product_id", product_id.get())
                    .field_i64("rating", rating.value() as i64);
                match e.status() {
                    Some(status) => builder.field_i64("status", status as i64).emit(),
                    None => builder.field("error", e.to_string()).emit(),
                }
            }
        }

        result
    }

    fn callback(&self) -> RatingCallback {
        let writer = self.clone();
        Rc::new(
            move |product_id: ProductId, rating: Rating| -> LocalBoxFuture<'static, ()> {
                let writer = writer.clone();
                Box::pin(async move {
                    // Already logged; the control has no failure mode of its own.
                    let _ = writer.submit(product_id, rating).await;
                })
            },
        )
    }
}

/// Lists up to `limit` products for the store user, each with a rating control.
///
/// Submitting a rating never changes the loaded entries; the control keeps
/// whatever the user selected.
#[derive(Clone)]
pub struct CatalogView {
    writer: RatingWriter,
    logger: StructuredLogger,
    limit: u32,
    state: Rc<RefCell<LoadState<CatalogEntry>>>,
    liveness: Liveness,
}

impl CatalogView {
    /// Create an unmounted catalog view.
    pub fn new(api: Rc<dyn StorefrontApi>, logger: &StructuredLogger) -> Self {
        let logger = logger.with_component("catalog");
        Self {
            writer: RatingWriter {
                api,
                logger: logger.clone(),
            },
            logger,
            limit: DEFAULT_PRODUCT_LIMIT,
            state: Rc::new(RefCell::new(LoadState::Unloaded)),
            liveness: Liveness::new(),
        }
    }

    /// Override the page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Current load state.
    pub fn state(&self) -> Ref<'_, LoadState<CatalogEntry>> {
        self.state.borrow()
    }

    /// True iff a product listing has been applied.
    pub fn is_loaded(&self) -> bool {
        self.state.borrow().is_loaded()
    }

    /// Whether the view is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.liveness.is_alive()
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

    /// Re-read the listing. A failure leaves the current state untouched.
    pub fn refresh(&self) -> impl Future<Output = ()> + 'static {
        let start = self.liveness.is_alive();
        if start {
            let mut state = self.state.borrow_mut();
            if !state.is_loaded() {
                *state = LoadState::Loading;
            }
        }
        let view = self.clone();
        async move {
            if start {
                view.fetch().await;
            }
        }
    }

    /// Tear the view down. Responses still in flight will be discarded.
    pub fn unmount(&self) {
        self.liveness.end();
        self.logger.debug("Catalog view unmounted");
    }

    async fn fetch(&self) {
        let result = self.writer.api.list_products(STORE_USER_ID, self.limit).await;

        if !self.liveness.is_alive() {
            self.logger.debug("Discarding product listing for unmounted view");
            return;
        }

        match result {
            Ok(products) => {
                let callback = self.writer.callback();
                let entries: Vec<CatalogEntry> = products
                    .into_iter()
                    .map(|product| CatalogEntry {
                        control: RatingControl::new(
                            product.id,
                            product.rating_value(),
                            callback.clone(),
                        ),
                        product,
                    })
                    .collect();
                self.logger
                    .info_builder("Products loaded")
                    .field_i64("count", entries.len() as i64)
                    .emit();
                *self.state.borrow_mut() = LoadState::Loaded(entries);
            }
            Err(e) => {
                self.logger
                    .warn_builder("Failed to load products")
                    .field("error", e.to_string())
                    .emit();
                let mut state = self.state.borrow_mut();
                if !state.is_loaded() {
                    *state = LoadState::Failed(e.to_string());
                }
            }
        }
    }

    /// Write one rating. Logs a warning on failure, never retries and never
    /// touches the loaded entries.
    pub fn submit_rating(
        &self,
        product_id: ProductId,
        rating: Rating,
    ) -> impl Future<Output = Result<(), ApiError>> + 'static {
        let writer = self.writer.clone();
        async move { writer.submit(product_id, rating).await }
    }

    /// Route a user's star click to the product's control.
    pub fn rate(
        &self,
        product_id: ProductId,
        value: i64,
    ) -> Result<LocalBoxFuture<'static, ()>, ViewError> {
        if !self.liveness.is_alive() {
            return Err(ViewError::Unmounted);
        }
        self.control(product_id)
            .ok_or(ViewError::UnknownProduct(product_id))?
            .rate(value)
    }

    /// The loaded entry's control for a product. Clones share the selection.
    pub fn control(&self, product_id: ProductId) -> Option<RatingControl> {
        self.state
            .borrow()
            .items()
            .iter()
            .find(|entry| entry.product.id == product_id)
            .map(|entry| entry.control.clone())
    }

    /// A control wired to this view's writer for a product that is not
    /// (or not yet) loaded, e.g. a rating posted from an earlier page.
    pub fn control_for(&self, product_id: ProductId, current: u8) -> RatingControl {
        RatingControl::new(product_id, current, self.writer.callback())
    }

    /// Render the catalog section.
    pub fn render(&self) -> String {
        let state = self.state.borrow();
        render_section("catalog", &state, |entry: &CatalogEntry| {
            format!(
                r#"<div class="catalog-entry">{}{}</div>"#,
                render_product_cell(
                    entry.product.id,
                    &entry.product.name,
                    &entry.product.description
                ),
                entry.control.render()
            )
        })
    }
}
