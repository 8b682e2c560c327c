//! This module contains the [WeakRelay] struct.

use std::sync::Arc;
use std::sync::Weak;

use crate::callback::MessageListener;
use crate::error::Error;
use crate::error::Result;

/// The [WeakRelay] is a weak reference to a listener and forwards each
/// delivered message to it while it is still alive.
///
/// A dispatch mechanism may own a relay indefinitely without that ownership
/// keeping the listener reachable. Once the last strong owner of the listener
/// is gone, [on_message](WeakRelay::on_message) becomes a no-op.
pub struct WeakRelay<L> {
    listener: Weak<L>,
}

impl<L> Clone for WeakRelay<L> {
    fn clone(&self) -> Self {
        Self {
            listener: self.listener.clone(),
        }
    }
}

impl<L> WeakRelay<L> {
    /// Create a new relay over a listener, capturing a weak reference to it.
    ///
    /// The caller keeps the `Arc` and must hold it for as long as deliveries
    /// are wanted. If the last strong reference is dropped, subsequent
    /// messages are dropped silently rather than delivered.
    pub fn new(listener: &Arc<L>) -> Self {
        Self {
            listener: Arc::downgrade(listener),
        }
    }

    /// Create a relay bound to no listener. Every delivery through it is a
    /// silent drop, same as a relay whose listener has been released.
    pub fn unbound() -> Self {
        Self {
            listener: Weak::new(),
        }
    }

    pub(crate) fn upgrade(&self) -> Result<Arc<L>> {
        match self.listener.upgrade() {
            Some(listener) => Ok(listener),
            None => Err(Error::ListenerReleased),
        }
    }
}

impl<L: MessageListener> WeakRelay<L> {
    /// Deliver one message to the listener if it is still alive.
    ///
    /// Resolving the weak reference is atomic with respect to a concurrent
    /// drop of the last strong owner: a call either observes a live listener
    /// and invokes it exactly once, or observes absence and returns without
    /// invocation, error, or log entry. An `Err` returned by the listener's
    /// own handling code is logged and not propagated.
    pub async fn on_message(&self, msg: L::Message) {
        let Ok(listener) = self.upgrade() else {
            return;
        };

        if let Err(e) = listener.on_message(msg).await {
            tracing::error!("Listener on_message failed: {e:?}");
        }
    }
}
