//! Publisher/Subscriber Traits
//!
//! Seams between the bus and the runners that use it.

use std::sync::Arc;

use crate::events::Event;

/// Anything that can be registered on an [`EventBus`](crate::bus::EventBus)
///
/// The bus calls `receive` synchronously while holding its registry read
/// lock, so implementations must hand the event off quickly and must not
/// call back into the bus from inside `receive`. There is no error channel:
/// a subscriber that cannot accept an event is expected to panic.
pub trait Subscriber: Send + Sync {
    /// Accept one broadcast event
    fn receive(&self, event: &Event);

    /// Name used in diagnostics; identity on the bus is the handle, not this
    fn subscriber_name(&self) -> &str {
        "subscriber"
    }
}

/// Anything that can broadcast events
pub trait Publisher: Send + Sync {
    /// Broadcast an event to every current subscriber
    fn publish(&self, event: Event);
}

impl<P: Publisher + ?Sized> Publisher for Arc<P> {
    fn publish(&self, event: Event) {
        (**self).publish(event)
    }
}

/// Diagnostic hook invoked once per published event, before delivery
pub trait PublishObserver: Send + Sync {
    fn on_publish(&self, event: &Event);
}

impl<F> PublishObserver for F
where
    F: Fn(&Event) + Send + Sync,
{
    fn on_publish(&self, event: &Event) {
        self(event)
    }
}
