//! Request handling independent of the Spin host types.

use std::rc::Rc;

use storefront_api::{Rating, StorefrontApi};
use storefront_observability::StructuredLogger;
use storefront_views::{CatalogView, RecommendationsView};

use crate::page::{render_error_page, render_page};
use crate::routes::{RatingForm, Route};

/// Status, headers and body ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl PageResponse {
    pub fn html(status: u16, body: String) -> Self {
        Self {
            status,
            headers: vec![(
                "content-type".to_string(),
                "text/html; charset=utf-8".to_string(),
            )],
            body,
        }
    }

    /// 303 back to the page after a form post.
    pub fn see_other(location: &str) -> Self {
        Self {
            status: 303,
            headers: vec![("location".to_string(), location.to_string())],
            body: String::new(),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self::html(status, render_error_page(status, message))
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// One request's worth of storefront: an API handle and a logger.
pub struct Storefront {
    api: Rc<dyn StorefrontApi>,
    logger: StructuredLogger,
}

impl Storefront {
    pub fn new(api: Rc<dyn StorefrontApi>, logger: StructuredLogger) -> Self {
        Self { api, logger }
    }

    pub async fn handle(&self, method: &str, path: &str, body: &[u8]) -> PageResponse {
        let route = Route::resolve(method, path);
        self.logger
            .info_builder("Request started")
            .field("method", method)
            .field("path", path)
            .field("route", format!("{:?}", route))
            .emit();

        let response = match route {
            Route::Home => self.home(RatingForm::from_target(path)).await,
            Route::SubmitRating => self.submit_rating(body).await,
            Route::MethodNotAllowed => PageResponse::error(405, "Method not allowed"),
            Route::NotFound => PageResponse::error(404, "Not found"),
        };

        self.logger
            .info_builder("Request complete")
            .field_i64("status", i64::from(response.status))
            .emit();
        response
    }

    /// Mount both views concurrently and render whatever each reached.
    ///
    /// `rated` is the selection the user just committed; it is shown in
    /// place of the server's value for that product.
    async fn home(&self, rated: Option<RatingForm>) -> PageResponse {
        let catalog = CatalogView::new(self.api.clone(), &self.logger);
        let recommendations = RecommendationsView::new(self.api.clone(), &self.logger);

        futures::join!(catalog.mount(), recommendations.mount());

        if let Some(rated) = rated {
            let control = catalog.control(rated.product_id);
            if let (Some(control), Ok(rating)) = (control, Rating::new(rated.rating)) {
                control.preview(rating.value());
            }
        }

        let html = render_page(
            &catalog.render(),
            &recommendations.render(),
            &self.logger.request_id().to_string(),
        );

        catalog.unmount();
        recommendations.unmount();

        PageResponse::html(200, html)
    }

    /// Write failures are logged by the catalog and not surfaced to the user.
    async fn submit_rating(&self, body: &[u8]) -> PageResponse {
        let form = match RatingForm::parse(body) {
            Ok(form) => form,
            Err(e) => {
                self.logger
                    .warn_builder("Rejected rating form")
                    .field("error", e.to_string())
                    .emit();
                return PageResponse::error(400, &e.to_string());
            }
        };

        let catalog = CatalogView::new(self.api.clone(), &self.logger);
        let result = catalog.control_for(form.product_id, 0).rate(form.rating);
        catalog.unmount();

        match result {
            Ok(write) => {
                write.await;
                PageResponse::see_other(&form.redirect_location())
            }
            Err(e) => {
                self.logger
                    .warn_builder("Rejected rating value")
                    .field("product_id", form.product_id.to_string())
                    .field_i64("rating", form.rating)
                    .emit();
                PageResponse::error(400, &e.to_string())
            }
        }
    }
}
