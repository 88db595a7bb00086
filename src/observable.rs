#![warn(clippy::all, clippy::pedantic)]

// Single-value observable cells. Subscribers are notified synchronously, in
// registration order. Writes made from inside a callback are queued until the
// current pass ends. Rc-based, single-threaded only.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use crossbeam_channel::{Receiver, TryIter, unbounded};
use log::trace;

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    version: u64,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
    notifying: bool,
    // Writes made during a pass, with the first subscriber id too new to see them
    pending: VecDeque<(T, u64)>,
}

impl<T> Inner<T> {
    fn is_subscribed(&self, id: u64) -> bool {
        self.subscribers.iter().any(|(subscriber, _)| *subscriber == id)
    }
}

// Ends a notification pass, including one cut short by a panicking callback
struct NotifyGuard<'a, T> {
    inner: &'a RefCell<Inner<T>>,
}

impl<T> Drop for NotifyGuard<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.notifying = false;
            inner.pending.clear();
        }
    }
}

/// Shared handle to an observable value. Clones refer to the same cell.
pub struct Holder<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Clone + 'static> Holder<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                next_id: 0,
                subscribers: Vec::new(),
                notifying: false,
                pending: VecDeque::new(),
            })),
        }
    }

    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    // Every write notifies each subscriber registered at the time of the write,
    // even if the new value equals the old one.
    pub fn set(&self, value: T) {
        let limit = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.version += 1;
            trace!("Holder write, version {}", inner.version);
            let limit = inner.next_id;
            if inner.notifying {
                inner.pending.push_back((value, limit));
                return;
            }
            inner.notifying = true;
            limit
        };

        let _guard = NotifyGuard { inner: &self.inner };
        let mut next = Some((value, limit));
        while let Some((value, limit)) = next {
            self.notify(&value, limit);
            next = self.inner.borrow_mut().pending.pop_front();
        }
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let current = self.get();
        self.set(f(&current));
    }

    fn notify(&self, value: &T, limit: u64) {
        let snapshot: Vec<(u64, Callback<T>)> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .filter(|(id, _)| *id < limit)
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        for (id, callback) in snapshot {
            // Skip anything unsubscribed by an earlier callback in this pass.
            if self.inner.borrow().is_subscribed(id) {
                callback(value);
            }
        }
    }

    // The callback is not invoked with the current value
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::new(callback)));
            id
        };

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            remove: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .borrow_mut()
                        .subscribers
                        .retain(|(subscriber, _)| *subscriber != id);
                }
            })),
        }
    }

    pub fn watch(&self) -> Watch<T> {
        let (sender, receiver) = unbounded();
        let subscription = self.subscribe(move |value: &T| {
            // The receiver lives in the same Watch as this subscription.
            let _ = sender.send(value.clone());
        });
        Watch {
            receiver,
            _subscription: subscription,
        }
    }
}

impl<T> Clone for Holder<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default + Clone + 'static> Default for Holder<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Holder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Holder")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

/// Registration returned by [`Holder::subscribe`]. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    remove: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }

    pub fn detach(mut self) {
        self.remove = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.remove.is_some())
            .finish()
    }
}

/// Channel-backed subscription. Values queue up until drained.
pub struct Watch<T> {
    receiver: Receiver<T>,
    _subscription: Subscription,
}

impl<T> Watch<T> {
    #[must_use]
    pub fn try_recv(&self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    pub fn try_iter(&self) -> TryIter<'_, T> {
        self.receiver.try_iter()
    }

    #[must_use]
    pub fn receiver(&self) -> &Receiver<T> {
        &self.receiver
    }
}
