//! Dependency-injection handle shared by columns and their strategies.
//!
//! The container is owned by the host application. Columns only clone the
//! handle and hand it to strategy factories, which may look up services by
//! type or by string identifier.

use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type ServiceMap<K> = HashMap<K, Arc<dyn Any + Send + Sync>>;

#[derive(Default)]
struct Services {
	by_type: RwLock<ServiceMap<TypeId>>,
	by_name: RwLock<ServiceMap<String>>,
}

/// Cheaply clonable service container.
///
/// Clones share the same underlying storage.
///
/// # Examples
///
/// ```
/// use reinhardt_grid::Container;
///
/// let container = Container::new();
/// container.set(42u32);
/// container.set_named("translator.locale", "en".to_string());
///
/// let handle = container.clone();
/// assert_eq!(*handle.get::<u32>().unwrap(), 42);
/// assert_eq!(*handle.get_named::<String>("translator.locale").unwrap(), "en");
/// ```
#[derive(Clone, Default)]
pub struct Container {
	services: Arc<Services>,
}

impl Container {
	/// Creates an empty container.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a service keyed by its type, replacing any previous one.
	pub fn set<T: Any + Send + Sync>(&self, value: T) {
		self.set_arc(Arc::new(value));
	}

	/// Registers an already shared service keyed by its type.
	pub fn set_arc<T: Any + Send + Sync>(&self, value: Arc<T>) {
		self.services.by_type.write().insert(TypeId::of::<T>(), value);
	}

	/// Retrieves a service by type.
	pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
		self.services
			.by_type
			.read()
			.get(&TypeId::of::<T>())
			.and_then(|service| service.clone().downcast::<T>().ok())
	}

	/// Returns true if a service of type `T` is registered.
	pub fn contains<T: Any + Send + Sync>(&self) -> bool {
		self.services.by_type.read().contains_key(&TypeId::of::<T>())
	}

	/// Registers a service under a string identifier.
	pub fn set_named<T: Any + Send + Sync>(&self, id: impl Into<String>, value: T) {
		self.services
			.by_name
			.write()
			.insert(id.into(), Arc::new(value));
	}

	/// Retrieves a service by identifier.
	///
	/// Returns `None` when the identifier is unknown or the stored service is
	/// not a `T`.
	pub fn get_named<T: Any + Send + Sync>(&self, id: &str) -> Option<Arc<T>> {
		self.services
			.by_name
			.read()
			.get(id)
			.and_then(|service| service.clone().downcast::<T>().ok())
	}

	/// Returns true if a service is registered under `id`.
	pub fn has(&self, id: &str) -> bool {
		self.services.by_name.read().contains_key(id)
	}

	/// Returns true if both handles point at the same storage.
	pub fn ptr_eq(&self, other: &Container) -> bool {
		Arc::ptr_eq(&self.services, &other.services)
	}
}

impl fmt::Debug for Container {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut ids: Vec<String> = self.services.by_name.read().keys().cloned().collect();
		ids.sort();
		f.debug_struct("Container")
			.field("typed_services", &self.services.by_type.read().len())
			.field("named_services", &ids)
			.finish()
	}
}
