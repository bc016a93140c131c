//! Controller abstraction.
//!
//! # Responsibilities
//! - Define the verb surface every controller exposes
//! - Provide 404 defaults so controllers override only what they serve
//! - Declare custom routes through `mapping()`
//!
//! # Design Decisions
//! - Handlers return boxed futures so the trait stays object-safe
//! - `type_label` defaults to `std::any::type_name`, giving convention-driven
//!   naming without per-controller boilerplate
//! - Controllers are registered once and live for the server's lifetime

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Boxed future produced by every controller handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// A custom route handler declared through [`Controller::mapping`].
pub type RouteHandler = Arc<dyn Fn(Request) -> HandlerFuture + Send + Sync>;

/// Mapping of route keys (`"METHOD:subpath"`) to handlers.
pub type RouteMap = HashMap<String, RouteHandler>;

/// A controller groups the handlers for one resource.
///
/// Implementors get the full verb set for free; each default answers
/// 404 with an empty body. The type name must end in `Controller`,
/// since the registration engine derives the URL segment from it
/// (`UserController` serves under `/user`).
pub trait Controller: Send + Sync + 'static {
    /// Concrete type label the route segment is derived from.
    ///
    /// The default reports the implementing type's name; override only
    /// when the type name cannot carry the `Controller` suffix.
    fn type_label(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Handler for GET requests at the controller root.
    fn get(&self, req: Request) -> HandlerFuture {
        no_resource(req)
    }

    /// Handler for POST requests at the controller root.
    fn post(&self, req: Request) -> HandlerFuture {
        no_resource(req)
    }

    /// Handler for PUT requests at the controller root.
    fn put(&self, req: Request) -> HandlerFuture {
        no_resource(req)
    }

    /// Handler for DELETE requests at the controller root.
    fn delete(&self, req: Request) -> HandlerFuture {
        no_resource(req)
    }

    /// Handler for PATCH requests at the controller root.
    fn patch(&self, req: Request) -> HandlerFuture {
        no_resource(req)
    }

    /// Handler for HEAD requests at the controller root.
    fn head(&self, req: Request) -> HandlerFuture {
        no_resource(req)
    }

    /// Handler for OPTIONS requests at the controller root.
    fn options(&self, req: Request) -> HandlerFuture {
        no_resource(req)
    }

    /// Custom routes nested under the controller segment.
    ///
    /// Keys are built with [`crate::routing::compose_key`]; an empty map
    /// registers only the default verb routes.
    fn mapping(&self) -> RouteMap {
        RouteMap::new()
    }
}

/// Default verb behavior: the resource does not serve this verb.
fn no_resource(_req: Request) -> HandlerFuture {
    Box::pin(async { StatusCode::NOT_FOUND.into_response() })
}

/// Wrap a plain async function as a [`RouteHandler`].
///
/// Convenience for `mapping()` entries:
///
/// ```rust
/// # use restmount::controller::{handler, RouteMap};
/// # use restmount::routing::compose_key;
/// # use axum::extract::Request;
/// # use axum::response::{IntoResponse, Response};
/// # async fn whoami(_req: Request) -> Response { "me".into_response() }
/// let mut map = RouteMap::new();
/// map.insert(compose_key("GET", "whoami"), handler(whoami));
/// ```
pub fn handler<F, Fut>(f: F) -> RouteHandler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(move |req| Box::pin(f(req)) as HandlerFuture)
}
