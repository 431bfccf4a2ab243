//! Request-ordered delivery of asynchronous page loads.
//!
//! DESIGN
//! ======
//! Every route guard takes a [`Ticket`] when it starts loading its page and
//! registers a sink for the outcome. Outcomes are released strictly in ticket
//! order: a load that finishes early waits until every earlier live ticket
//! has been delivered. A guard that unmounts abandons its ticket; the slot is
//! dropped, later tickets stop waiting on it, and its eventual outcome is
//! discarded without touching the unmounted guard.
//!
//! There is no timeout. A load that never finishes blocks later tickets until
//! it is abandoned.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;

/// Position of one load request in request order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

type Sink<T> = Box<dyn FnOnce(T) + Send + Sync>;

enum Slot<T> {
    Waiting(Sink<T>),
    Ready(Sink<T>, T),
}

/// An outcome released for delivery to its sink.
pub struct Delivery<T> {
    ticket: Ticket,
    sink: Sink<T>,
    value: T,
}

impl<T> Delivery<T> {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Hand the outcome to the sink registered with the ticket.
    pub fn deliver(self) {
        (self.sink)(self.value);
    }
}

impl<T> fmt::Debug for Delivery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delivery").field("ticket", &self.ticket).finish_non_exhaustive()
    }
}

pub struct LoadSequencer<T> {
    next_ticket: u64,
    slots: BTreeMap<Ticket, Slot<T>>,
}

impl<T> Default for LoadSequencer<T> {
    fn default() -> Self {
        Self { next_ticket: 0, slots: BTreeMap::new() }
    }
}

impl<T> LoadSequencer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request whose outcome goes to `sink`.
    pub fn begin(&mut self, sink: impl FnOnce(T) + Send + Sync + 'static) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.slots.insert(ticket, Slot::Waiting(Box::new(sink)));
        ticket
    }

    /// Record the outcome for `ticket` and release everything now in order.
    ///
    /// Outcomes for abandoned or unknown tickets are dropped, as are repeated
    /// completions of the same ticket.
    pub fn complete(&mut self, ticket: Ticket, value: T) -> Vec<Delivery<T>> {
        match self.slots.remove(&ticket) {
            Some(Slot::Waiting(sink)) => {
                self.slots.insert(ticket, Slot::Ready(sink, value));
            }
            Some(ready @ Slot::Ready(..)) => {
                log::debug!("ignoring repeated completion for {ticket:?}");
                self.slots.insert(ticket, ready);
            }
            None => log::debug!("dropping outcome for abandoned {ticket:?}"),
        }
        self.release()
    }

    /// Forget `ticket`. Later tickets no longer wait on it.
    pub fn abandon(&mut self, ticket: Ticket) -> Vec<Delivery<T>> {
        if self.slots.remove(&ticket).is_some() {
            log::debug!("abandoned page load {ticket:?}");
        }
        self.release()
    }

    /// Requests neither delivered nor abandoned.
    pub fn pending(&self) -> usize {
        self.slots.len()
    }

    fn release(&mut self) -> Vec<Delivery<T>> {
        let mut released = Vec::new();
        while let Some(entry) = self.slots.first_entry() {
            if matches!(entry.get(), Slot::Waiting(_)) {
                break;
            }
            let ticket = *entry.key();
            if let Slot::Ready(sink, value) = entry.remove() {
                released.push(Delivery { ticket, sink, value });
            }
        }
        released
    }
}

/// Await `load`, pass its outcome to `complete`, and deliver whatever that
/// released.
pub async fn resolve_in_order<T, F, C>(ticket: Ticket, load: F, complete: C)
where
    F: Future<Output = T>,
    C: FnOnce(Ticket, T) -> Vec<Delivery<T>>,
{
    let value = load.await;
    for delivery in complete(ticket, value) {
        delivery.deliver();
    }
}
