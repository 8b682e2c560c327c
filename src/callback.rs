//! This module contains the [MessageListener] trait.

use async_trait::async_trait;

/// The error type a listener may return from its own handling code.
/// It stays the listener's concern: the relay logs it and never propagates it
/// back to the dispatch mechanism.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// The [MessageListener] trait is the capability a type implements to receive
/// messages forwarded by a [WeakRelay](crate::relay::WeakRelay).
///
/// Implement it on the owning object itself or on a small handler type the
/// owner holds strongly. The relay never keeps the implementor alive; the
/// owner is responsible for staying strongly reachable for as long as it
/// wants deliveries.
#[async_trait]
pub trait MessageListener {
    /// The message payload delivered by the dispatch mechanism. Opaque to the
    /// relay, which passes it through unchanged.
    type Message: Send;

    /// Box this listener.
    fn boxed(self) -> BoxedListener<Self::Message>
    where Self: Sized + Send + Sync + 'static {
        Box::new(self)
    }

    /// Handle one delivered message.
    async fn on_message(&self, msg: Self::Message) -> Result<(), CallbackError>;
}

/// Type alias of boxed [MessageListener].
pub type BoxedListener<M> = Box<dyn MessageListener<Message = M> + Send + Sync>;

#[async_trait]
impl<L> MessageListener for Box<L>
where L: MessageListener + Send + Sync + ?Sized
{
    type Message = L::Message;

    async fn on_message(&self, msg: Self::Message) -> Result<(), CallbackError> {
        (**self).on_message(msg).await
    }
}
