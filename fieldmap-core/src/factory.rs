//! The factory constructs blank destination instances.
//!
//! `T::default` is bound once per type into a process-wide registry, and never evicted.
//! The registry grows with the number of distinct destination types, not with call volume.

use std::any::{type_name, Any, TypeId};

use dashmap::DashMap;
use lazy_static::lazy_static;
use log::debug;

type BoundConstructor = &'static (dyn Any + Send + Sync);

lazy_static! {
    /// Every constructor bound so far, keyed by the type it constructs.
    static ref CONSTRUCTORS: DashMap<TypeId, BoundConstructor> = DashMap::new();
}

/// A resolved constructor for `T`.
///
/// Calling [Constructor::create] is a plain function call, no registry lookup happens.
pub(crate) struct Constructor<T> {
    create: fn() -> T,
}

impl<T> Constructor<T> {
    /// Creates a new blank instance.
    pub(crate) fn create(&self) -> T {
        (self.create)()
    }
}

impl<T> Clone for Constructor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Constructor<T> {}

/// Creates default-initialized instances of destination types.
pub(crate) struct Factory;

impl Factory {
    /// Creates a new instance of `T`, binding its constructor on first use.
    pub(crate) fn create<T>() -> T
    where
        T: Default + 'static,
    {
        Self::constructor::<T>().create()
    }

    /// Resolves the constructor of `T`, binding `T::default` if nothing is bound yet.
    ///
    /// Concurrent first use is idempotent: exactly one constructor ends up bound,
    /// and every caller gets that one.
    pub(crate) fn constructor<T>() -> Constructor<T>
    where
        T: Default + 'static,
    {
        let id = TypeId::of::<T>();

        if let Some(bound) = CONSTRUCTORS.get(&id) {
            return Self::downcast(*bound);
        }

        let bound = *CONSTRUCTORS.entry(id).or_insert_with(|| {
            debug!("Binding default constructor for {}", type_name::<T>());
            Self::leak::<T>()
        });

        Self::downcast(bound)
    }

    /// Returns true if a constructor for `T` has been bound.
    #[cfg(test)]
    fn is_bound<T>() -> bool
    where
        T: 'static,
    {
        CONSTRUCTORS.contains_key(&TypeId::of::<T>())
    }

    fn leak<T>() -> BoundConstructor
    where
        T: Default + 'static,
    {
        let create: fn() -> T = T::default;
        let leaked: &'static fn() -> T = Box::leak(Box::new(create));
        leaked
    }

    fn downcast<T>(bound: BoundConstructor) -> Constructor<T>
    where
        T: Default + 'static,
    {
        // Entries are keyed by the type they construct, and only ever hold `T::default`
        let create = bound
            .downcast_ref::<fn() -> T>()
            .copied()
            .unwrap_or(T::default);

        Constructor { create }
    }
}
