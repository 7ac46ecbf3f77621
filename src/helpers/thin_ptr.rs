use std::sync::{Arc, Weak};

/// A stable identity for reference-counted trait objects.
pub trait ThinPtr {
    fn thin_ptr(&self) -> *const ();
}

/// Arc::ptr_eq() is broken for trait objects. See
/// https://github.com/rust-lang/rust/issues/46139. Use this instead
impl<T: ?Sized> ThinPtr for Arc<T> {
    fn thin_ptr(&self) -> *const () {
        Arc::as_ptr(self) as *const ()
    }
}

/// Weak::ptr_eq() is broken for trait objects. See
/// https://github.com/rust-lang/rust/issues/46139. Use this instead
impl<T: ?Sized> ThinPtr for Weak<T> {
    fn thin_ptr(&self) -> *const () {
        match self.upgrade() {
            Some(arc) => arc.thin_ptr(),
            None => std::ptr::null(),
        }
    }
}
