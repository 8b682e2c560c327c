//! A dummy in-process dispatch mechanism for local testing.
//!
//! It stands in for the external platform facility that owns relays and
//! delivers messages to them: registered [WeakRelay]s are held in a map and
//! submitted messages are forwarded over a single delivery task, so delivery
//! order equals submission order. This module is test tooling, not a message
//! queue implementation.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::mpsc;

use crate::callback::MessageListener;
use crate::error::Error;
use crate::error::Result;
use crate::relay::WeakRelay;

/// [DummyDispatcher] owns registered relays and delivers dispatched messages
/// to them from a single serialized task.
pub struct DummyDispatcher<L: MessageListener> {
    relays: Arc<DashMap<String, WeakRelay<L>>>,
    queue: mpsc::UnboundedSender<(String, L::Message)>,
}

impl<L> DummyDispatcher<L>
where
    L: MessageListener + Send + Sync + 'static,
    L::Message: 'static,
{
    /// Create a dispatcher and spawn its delivery task. The task stops when
    /// the dispatcher is dropped.
    pub fn new() -> Self {
        let relays: Arc<DashMap<String, WeakRelay<L>>> = Arc::new(DashMap::new());
        let (queue, mut incoming) = mpsc::unbounded_channel::<(String, L::Message)>();

        let delivering = relays.clone();
        tokio::spawn(async move {
            while let Some((id, msg)) = incoming.recv().await {
                let Some(relay) = delivering.get(&id).map(|r| r.value().clone()) else {
                    continue;
                };
                relay.on_message(msg).await;
            }
        });

        Self { relays, queue }
    }

    /// Register a relay under an id. Fails if the id is already taken.
    pub fn register(&self, id: &str, relay: WeakRelay<L>) -> Result<()> {
        match self.relays.entry(id.to_string()) {
            Entry::Occupied(_) => Err(Error::RelayAlreadyExists(id.to_string())),
            Entry::Vacant(entry) => {
                entry.insert(relay);
                Ok(())
            }
        }
    }

    /// Discard the relay registered under an id.
    pub fn unregister(&self, id: &str) -> Result<()> {
        self.relays
            .remove(id)
            .map(|_| ())
            .ok_or(Error::RelayNotFound(id.to_string()))
    }

    /// Submit a message for delivery to the relay registered under an id.
    /// Returns as soon as the message is queued.
    pub fn dispatch(&self, id: &str, msg: L::Message) -> Result<()> {
        if !self.relays.contains_key(id) {
            return Err(Error::RelayNotFound(id.to_string()));
        }

        self.queue
            .send((id.to_string(), msg))
            .map_err(|_| Error::DispatcherClosed)
    }

    /// Ids of all registered relays.
    pub fn relay_ids(&self) -> Vec<String> {
        self.relays.iter().map(|kv| kv.key().clone()).collect()
    }
}

impl<L> Default for DummyDispatcher<L>
where
    L: MessageListener + Send + Sync + 'static,
    L::Message: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
