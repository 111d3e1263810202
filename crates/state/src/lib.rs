#![forbid(unsafe_code)]

mod seed;

pub use seed::{seed_clients, seed_payments, seed_projects, seed_state};

use fd_core::{Action, DashboardState, DashboardStats, apply, dashboard_stats};
use std::fmt;

pub type Subscriber = Box<dyn FnMut(&DashboardState)>;

/// The single writer: owns the current state, applies actions through the
/// pure reducer, and notifies subscribers when a transition actually changed
/// something. Readers see immutable snapshots between writes.
pub struct Dashboard {
    state: DashboardState,
    subscribers: Vec<Subscriber>,
}

impl Dashboard {
    pub fn new(state: DashboardState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    /// Container preloaded with the fixed seed dataset.
    pub fn seeded() -> Self {
        Self::new(seed_state())
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Derived summary, recomputed from the current collections on demand.
    pub fn stats(&self) -> DashboardStats {
        dashboard_stats(&self.state.clients, &self.state.projects, &self.state.payments)
    }

    /// Applies the action in dispatch order (single writer, synchronous).
    /// Subscribers fire only when some collection identity changed; a no-op
    /// transition (e.g. marking a missing project paid) stays silent.
    pub fn dispatch(&mut self, action: Action) {
        let next = apply(&self.state, action);
        let changed = !next.same_collections(&self.state);
        self.state = next;
        if changed {
            for subscriber in &mut self.subscribers {
                subscriber(&self.state);
            }
        }
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }
}

impl fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dashboard")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
