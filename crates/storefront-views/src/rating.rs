//! Star rating control.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use storefront_api::{ProductId, Rating};

use crate::render::render_stars_form;
use crate::ViewError;

/// Capability handed to a [`RatingControl`] by its owner.
///
/// Invoked once per committed rating; the returned future is the owner's
/// pending write, for the caller to drive.
pub type RatingCallback = Rc<dyn Fn(ProductId, Rating) -> LocalBoxFuture<'static, ()>>;

/// Captures one user's star selection for one product.
///
/// Owns no network access; the write happens in whatever the callback does.
/// Clones share the displayed selection.
#[derive(Clone)]
pub struct RatingControl {
    product_id: ProductId,
    initial: u8,
    selection: Rc<Cell<u8>>,
    on_rate: RatingCallback,
}

impl fmt::Debug for RatingControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingControl")
            .field("product_id", &self.product_id)
            .field("initial", &self.initial)
            .field("selection", &self.selection.get())
            .finish()
    }
}

impl RatingControl {
    /// Create a control showing `initial` (0 = not yet rated).
    pub fn new(product_id: ProductId, initial: u8, on_rate: RatingCallback) -> Self {
        let initial = initial.min(Rating::MAX);
        Self {
            product_id,
            initial,
            selection: Rc::new(Cell::new(initial)),
            on_rate,
        }
    }

    /// The product this control rates.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// The rating the control was created with.
    pub fn initial(&self) -> u8 {
        self.initial
    }

    /// The currently displayed selection.
    pub fn selection(&self) -> u8 {
        self.selection.get()
    }

    /// Show `value` without committing it (hover). Out-of-range values are ignored.
    pub fn preview(&self, value: u8) {
        if value <= Rating::MAX {
            self.selection.set(value);
        }
    }

    /// Commit a rating: display it and invoke the owner's callback once.
    ///
    /// Values outside 1-5 leave the control untouched and invoke nothing.
    pub fn rate(&self, value: i64) -> Result<LocalBoxFuture<'static, ()>, ViewError> {
        let rating = Rating::new(value)?;
        self.selection.set(rating.value());
        Ok((self.on_rate)(self.product_id, rating))
    }

    /// Render the star form.
    pub fn render(&self) -> String {
        render_stars_form(self.product_id, self.selection())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use storefront_api::ApiError;

    use super::*;

    fn recording_control(initial: u8) -> (RatingControl, Rc<RefCell<Vec<(ProductId, u8)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let callback: RatingCallback = Rc::new(
            move |id: ProductId, rating: Rating| -> LocalBoxFuture<'static, ()> {
                sink.borrow_mut().push((id, rating.value()));
                Box::pin(async {})
            },
        );
        (RatingControl::new(ProductId::new(7), initial, callback), calls)
    }

    #[test]
    fn test_initial_selection() {
        let (control, _) = recording_control(3);
        assert_eq!(control.selection(), 3);
        assert_eq!(control.initial(), 3);
    }

    #[test]
    fn test_preview_does_not_invoke_callback() {
        let (control, calls) = recording_control(0);
        control.preview(2);
        control.preview(4);
        control.preview(9);
        assert_eq!(control.selection(), 4);
        assert!(calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_rate_invokes_callback_once() {
        let (control, calls) = recording_control(3);
        control.preview(1);
        control.preview(2);
        control.rate(5).unwrap().await;

        assert_eq!(*calls.borrow(), vec![(ProductId::new(7), 5)]);
        assert_eq!(control.selection(), 5);
    }

    #[test]
    fn test_invalid_rating_invokes_nothing() {
        let (control, calls) = recording_control(2);
        for value in [0, 6, -3] {
            let err = control.rate(value).err();
            assert_eq!(err, Some(ViewError::Api(ApiError::InvalidRating(value))));
        }
        assert!(calls.borrow().is_empty());
        assert_eq!(control.selection(), 2);
    }

    #[test]
    fn test_render_uses_local_selection() {
        let (control, _) = recording_control(1);
        control.preview(4);
        assert!(control.render().contains(r#"data-rating="4""#));
    }
}
