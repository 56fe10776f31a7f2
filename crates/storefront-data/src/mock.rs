//! Scripted in-memory transport.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::{FetchError, Method, RequestBuilder, Response, Transport};

struct Route {
    method: Method,
    path: String,
    replies: VecDeque<Result<Response, FetchError>>,
}

/// Transport that answers from scripted replies and records every request.
///
/// Routes match on method and on the URL path suffix (query excluded).
/// Several replies on one route are served in order; the last one repeats.
/// Unmatched requests get an empty 404.
#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<Vec<Route>>,
    requests: RefCell<Vec<RequestBuilder>>,
}

impl MockTransport {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a response for `method path`.
    pub fn on(&self, method: Method, path: &str, response: Response) -> &Self {
        self.push(method, path, Ok(response));
        self
    }

    /// Script a transport failure for `method path`.
    pub fn on_error(&self, method: Method, path: &str, error: FetchError) -> &Self {
        self.push(method, path, Err(error));
        self
    }

    fn push(&self, method: Method, path: &str, reply: Result<Response, FetchError>) {
        let mut routes = self.routes.borrow_mut();
        match routes
            .iter_mut()
            .find(|r| r.method == method && r.path == path)
        {
            Some(route) => route.replies.push_back(reply),
            None => routes.push(Route {
                method,
                path: path.to_string(),
                replies: VecDeque::from([reply]),
            }),
        }
    }

    /// Every request seen so far, in send order.
    pub fn requests(&self) -> Vec<RequestBuilder> {
        self.requests.borrow().clone()
    }

    /// Requests seen for `method path`.
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<RequestBuilder> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method() == method && r.url().ends_with(path))
            .cloned()
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        self.requests.borrow_mut().push(request.clone());

        let mut routes = self.routes.borrow_mut();
        let route = routes
            .iter_mut()
            .find(|r| r.method == request.method() && request.url().ends_with(&r.path));

        match route {
            Some(route) if route.replies.len() > 1 => route
                .replies
                .pop_front()
                .unwrap_or_else(|| Ok(Response::empty(404))),
            Some(route) => route
                .replies
                .front()
                .cloned()
                .unwrap_or_else(|| Ok(Response::empty(404))),
            None => Ok(Response::empty(404)),
        }
    }
}
