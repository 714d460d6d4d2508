//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving ports,
//! so they can be exercised with mocks and no I/O.

use std::sync::Arc;

use crate::domain::ports::{PersonCommand, PersonQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Create, update and delete.
    pub persons: Arc<dyn PersonCommand>,
    /// Get and list.
    pub persons_query: Arc<dyn PersonQuery>,
}

impl HttpState {
    /// Bundle the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use person_service::domain::PersonService;
    /// use person_service::inbound::http::state::HttpState;
    /// use person_service::outbound::memory::InMemoryPersonRepository;
    ///
    /// let service = Arc::new(PersonService::new(Arc::new(InMemoryPersonRepository::new())));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.persons_query.clone();
    /// ```
    pub fn new(persons: Arc<dyn PersonCommand>, persons_query: Arc<dyn PersonQuery>) -> Self {
        Self {
            persons,
            persons_query,
        }
    }
}
