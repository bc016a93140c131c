//! Route registration engine.
//!
//! # Responsibilities
//! - Register the seven default verbs for every controller at `/{name}`
//! - Decode custom mappings and register them at `/{name}/{subpath}`
//! - Wrap every final handler with the panic recovery guard
//! - Nest controller sets under normalized base paths
//!
//! # Design Decisions
//! - Misconfiguration (bad name, malformed key) panics: the process must
//!   not start serving with an inconsistent route table
//! - Unknown custom-route methods are dropped without a diagnostic,
//!   matching the source behavior this engine replaces
//! - The recovery guard is applied per handler, not per controller,
//!   because the recovery scope is per invocation

use std::sync::Arc;

use axum::extract::Request;
use axum::routing::{delete, get, head, options, patch, post, put, MethodRouter};
use axum::Router;

use crate::controller::{Controller, HandlerFuture, RouteHandler};
use crate::observability::ErrorSink;
use crate::recover::Recovery;
use crate::routing::{parse_key, resolve_name, RoutingError};

/// Mounts controllers onto an axum [`Router`] by naming convention.
///
/// Every handler the registry registers is wrapped by [`Recovery`], so a
/// panicking controller degrades to a generic server-error envelope
/// instead of tearing down the connection task.
#[derive(Clone, Default)]
pub struct ControllerRegistry {
    recovery: Recovery,
}

impl ControllerRegistry {
    /// Registry without an error sink; recovered panics are swallowed.
    pub fn new() -> Self {
        Self {
            recovery: Recovery::new(),
        }
    }

    /// Registry forwarding recovered panics to `sink`.
    pub fn with_error_sink(sink: Arc<dyn ErrorSink>) -> Self {
        Self {
            recovery: Recovery::with_sink(sink),
        }
    }

    /// Mount controllers at the router root.
    ///
    /// For each controller, in order: derive its segment from the type
    /// label, register all seven verbs at `/{name}`, then register each
    /// entry of [`Controller::mapping`] at `/{name}/{subpath}`. An empty
    /// slice is a no-op.
    ///
    /// Custom-mapping methods outside the fixed verb set
    /// (GET/POST/PUT/DELETE/HEAD/OPTIONS/PATCH) are silently ignored: no
    /// route is added and nothing is logged, so a typo in the method
    /// token surfaces only as a 404 at request time.
    ///
    /// # Panics
    ///
    /// Panics if a controller name lacks the `Controller` suffix, if a
    /// mapping key is malformed, or if two registrations collide on the
    /// same (method, path) pair (axum rejects the duplicate).
    pub fn mount(&self, router: Router, controllers: &[Arc<dyn Controller>]) -> Router {
        match self.try_mount(router, controllers) {
            Ok(router) => router,
            Err(err) => panic!("controller registration failed: {err}"),
        }
    }

    /// Mount controllers under a base path.
    ///
    /// The base path is normalized to a single leading `/` before the
    /// controllers' routes are nested under it; a bare `/` (or empty)
    /// base mounts at the root.
    ///
    /// # Panics
    ///
    /// Same conditions as [`mount`](Self::mount).
    pub fn mount_group(
        &self,
        router: Router,
        base: &str,
        controllers: &[Arc<dyn Controller>],
    ) -> Router {
        let base = normalize_base(base);
        if base == "/" {
            return self.mount(router, controllers);
        }
        let group = self.mount(Router::new(), controllers);
        router.nest(&base, group)
    }

    /// Mount one group per (base path, controller list) pair.
    ///
    /// Groups are independent; no cross-group collision detection is
    /// attempted beyond what axum itself enforces.
    ///
    /// # Panics
    ///
    /// Same conditions as [`mount`](Self::mount).
    pub fn mount_groups<I>(&self, mut router: Router, groups: I) -> Router
    where
        I: IntoIterator<Item = (String, Vec<Arc<dyn Controller>>)>,
    {
        for (base, controllers) in groups {
            router = self.mount_group(router, &base, &controllers);
        }
        router
    }

    fn try_mount(
        &self,
        mut router: Router,
        controllers: &[Arc<dyn Controller>],
    ) -> Result<Router, RoutingError> {
        if controllers.is_empty() {
            return Ok(router);
        }
        for controller in controllers {
            router = self.mount_controller(router, controller)?;
        }
        Ok(router)
    }

    fn mount_controller(
        &self,
        mut router: Router,
        controller: &Arc<dyn Controller>,
    ) -> Result<Router, RoutingError> {
        let name = resolve_name(controller.type_label())?;

        let root = format!("/{name}");
        router = router.route(&root, self.default_routes(controller));

        for (key, custom) in controller.mapping() {
            let (method, subpath) = parse_key(&key)?;
            let path = format!("/{name}/{subpath}");
            let wrapped = self.wrap_custom(custom);
            router = match method.as_str() {
                "GET" => router.route(&path, get(wrapped)),
                "POST" => router.route(&path, post(wrapped)),
                "PUT" => router.route(&path, put(wrapped)),
                "DELETE" => router.route(&path, delete(wrapped)),
                "HEAD" => router.route(&path, head(wrapped)),
                "OPTIONS" => router.route(&path, options(wrapped)),
                "PATCH" => router.route(&path, patch(wrapped)),
                // Unknown verb: no route, no diagnostic.
                _ => router,
            };
        }

        Ok(router)
    }

    /// One method router carrying all seven default verbs, each guarded.
    fn default_routes(&self, controller: &Arc<dyn Controller>) -> MethodRouter {
        get(self.verb_handler(controller, |c, req| c.get(req)))
            .post(self.verb_handler(controller, |c, req| c.post(req)))
            .put(self.verb_handler(controller, |c, req| c.put(req)))
            .delete(self.verb_handler(controller, |c, req| c.delete(req)))
            .patch(self.verb_handler(controller, |c, req| c.patch(req)))
            .head(self.verb_handler(controller, |c, req| c.head(req)))
            .options(self.verb_handler(controller, |c, req| c.options(req)))
    }

    fn verb_handler(
        &self,
        controller: &Arc<dyn Controller>,
        verb: fn(&dyn Controller, Request) -> HandlerFuture,
    ) -> impl Fn(Request) -> HandlerFuture + Clone + Send + Sync + 'static {
        let controller = Arc::clone(controller);
        let recovery = self.recovery.clone();
        move |req: Request| {
            let controller = Arc::clone(&controller);
            let recovery = recovery.clone();
            Box::pin(async move { recovery.guard(verb(controller.as_ref(), req)).await })
                as HandlerFuture
        }
    }

    fn wrap_custom(
        &self,
        handler: RouteHandler,
    ) -> impl Fn(Request) -> HandlerFuture + Clone + Send + Sync + 'static {
        let recovery = self.recovery.clone();
        move |req: Request| {
            let handler = Arc::clone(&handler);
            let recovery = recovery.clone();
            Box::pin(async move { recovery.guard(handler(req)).await }) as HandlerFuture
        }
    }
}

/// Ensure the base path carries exactly one leading separator.
fn normalize_base(base: &str) -> String {
    if base.starts_with('/') {
        base.to_string()
    } else {
        format!("/{base}")
    }
}
