use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Owning slot for a self-rescheduling timer. The slot is the only strong
/// owner; callbacks hold a [`TimerSlotRef`] and upgrade it to reschedule, so
/// dropping the slot cancels the pending timer and ends the chain.
pub struct TimerSlot<T> {
    inner: Rc<RefCell<Option<T>>>,
}

pub struct TimerSlotRef<T> {
    inner: Weak<RefCell<Option<T>>>,
}

impl<T> TimerSlot<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set(&self, timer: T) {
        *self.inner.borrow_mut() = Some(timer);
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().take();
    }

    pub fn weak(&self) -> TimerSlotRef<T> {
        TimerSlotRef {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerSlotRef<T> {
    pub fn upgrade(&self) -> Option<TimerSlot<T>> {
        self.inner.upgrade().map(|inner| TimerSlot { inner })
    }
}

impl<T> Clone for TimerSlotRef<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
