//! Explicit per-session context: the model pair plus constructed services.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One comparison session over a source/target model pair.
///
/// Services built for the session (such as the code mapper) are cached here
/// keyed by their type, so repeated get-or-create calls observe the same
/// instance and with it the same lazily built state. Single-threaded by
/// design; wrap in external synchronization before sharing across threads.
pub struct DiffSession<M> {
    source: Rc<M>,
    target: Rc<M>,
    services: RefCell<HashMap<TypeId, Rc<dyn Any>>>,
}

impl<M> DiffSession<M> {
    pub fn new(source: M, target: M) -> Self {
        DiffSession {
            source: Rc::new(source),
            target: Rc::new(target),
            services: RefCell::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> Rc<M> {
        Rc::clone(&self.source)
    }

    pub fn target(&self) -> Rc<M> {
        Rc::clone(&self.target)
    }

    /// Fetch an already-constructed service.
    pub fn service<S: Any>(&self) -> Option<Rc<S>> {
        let services = self.services.borrow();
        let service = services.get(&TypeId::of::<S>())?;
        Rc::clone(service).downcast::<S>().ok()
    }

    /// Get-or-create a service: returns the cached instance when present,
    /// otherwise runs `init` and caches the result. A failing `init` caches
    /// nothing, so construction can be retried.
    pub fn service_or_try_insert<S, E>(
        &self,
        init: impl FnOnce() -> Result<S, E>,
    ) -> Result<Rc<S>, E>
    where
        S: Any,
    {
        if let Some(existing) = self.service::<S>() {
            return Ok(existing);
        }
        let built = Rc::new(init()?);
        // `init` may itself have registered the service; keep the first one.
        let mut services = self.services.borrow_mut();
        let slot = services
            .entry(TypeId::of::<S>())
            .or_insert_with(|| Rc::clone(&built) as Rc<dyn Any>);
        Ok(Rc::clone(slot).downcast::<S>().unwrap_or(built))
    }
}
