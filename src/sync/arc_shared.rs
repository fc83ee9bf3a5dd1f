use alloc::sync::Arc;

#[cfg(test)]
mod tests;

/// Shared wrapper backed by [`alloc::sync::Arc`].
///
/// Equality compares handle identity rather than pointee contents, which is the
/// property waiter registries rely on when removing a specific entry.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T: ?Sized> ArcShared<T> {
  /// Creates a new `ArcShared` by wrapping the provided value.
  pub fn new(value: T) -> Self
  where
    T: Sized, {
    Self(Arc::new(value))
  }
}

impl<T: ?Sized> core::ops::Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized + core::fmt::Debug> core::fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ArcShared").finish()
  }
}

impl<T: ?Sized> PartialEq for ArcShared<T> {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl<T: ?Sized> Eq for ArcShared<T> {}
