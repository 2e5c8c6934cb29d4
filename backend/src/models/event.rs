//! Event logging for generator replay and desync auditing.
//!
//! A [`RngManager`](crate::rng::RngManager) with event recording enabled logs
//! every state change here. Events enable:
//! - Desync investigation (diff two peers' draw streams step by step)
//! - Debugging (which system consumed which draw)
//! - Auditing (verify a restored stream lines up with the recorded one)
//!
//! # Example
//!
//! ```rust
//! use replay_rng_core::models::{RngEvent, RngEventLog};
//!
//! let mut log = RngEventLog::new();
//! log.log(RngEvent::Seeded { step: 0, seed: 12345 });
//! log.log(RngEvent::Draw { step: 1, value: 2101738651 });
//!
//! assert_eq!(log.events_of_type("Draw").len(), 1);
//! ```

use serde::Serialize;

/// Generator event capturing a state change.
///
/// `step` is the manager's draw count after the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum RngEvent {
    /// Generator (re)seeded
    Seeded { step: u32, seed: i32 },

    /// One raw value drawn
    Draw { step: u32, value: i32 },

    /// Independent copy split off at this step
    Forked { step: u32 },

    /// State rebuilt from the seed
    Restored { from_step: u32, step: u32 },
}

impl RngEvent {
    /// Draw count at which the event happened
    pub fn step(&self) -> u32 {
        match self {
            RngEvent::Seeded { step, .. } => *step,
            RngEvent::Draw { step, .. } => *step,
            RngEvent::Forked { step } => *step,
            RngEvent::Restored { step, .. } => *step,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            RngEvent::Seeded { .. } => "Seeded",
            RngEvent::Draw { .. } => "Draw",
            RngEvent::Forked { .. } => "Forked",
            RngEvent::Restored { .. } => "Restored",
        }
    }
}

/// Event log for storing and querying generator events.
///
/// This is a simple wrapper around Vec<RngEvent> with convenience methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RngEventLog {
    events: Vec<RngEvent>,
}

impl RngEventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: RngEvent) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[RngEvent] {
        &self.events
    }

    /// Get events for a specific step
    pub fn events_at_step(&self, step: u32) -> Vec<&RngEvent> {
        self.events.iter().filter(|e| e.step() == step).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&RngEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Raw values drawn, in order
    pub fn drawn_values(&self) -> Vec<i32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RngEvent::Draw { value, .. } => Some(*value),
                _ => None,
            })
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_step() {
        let event = RngEvent::Restored {
            from_step: 40,
            step: 12,
        };
        assert_eq!(event.step(), 12);
        assert_eq!(event.event_type(), "Restored");
    }

    #[test]
    fn test_event_log_queries() {
        let mut log = RngEventLog::new();
        assert!(log.is_empty());

        log.log(RngEvent::Seeded { step: 0, seed: 1 });
        log.log(RngEvent::Draw { step: 1, value: 10 });
        log.log(RngEvent::Forked { step: 1 });
        log.log(RngEvent::Draw { step: 2, value: 20 });

        assert_eq!(log.len(), 4);
        assert_eq!(log.events_at_step(1).len(), 2);
        assert_eq!(log.events_of_type("Draw").len(), 2);
        assert_eq!(log.drawn_values(), vec![10, 20]);

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let json = serde_json::to_string(&RngEvent::Draw { step: 3, value: 7 }).unwrap();
        assert_eq!(json, r#"{"type":"Draw","step":3,"value":7}"#);
    }
}
