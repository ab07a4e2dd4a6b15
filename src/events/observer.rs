//! Observers receiving game events.

use std::cell::RefCell;
use std::rc::Rc;

use super::GameEvent;

/// Receives every event the game emits, in order.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Records events in memory.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event seen so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Events matching `pred`.
    pub fn matching<'a>(
        &'a self,
        pred: impl Fn(&GameEvent) -> bool + 'a,
    ) -> impl Iterator<Item = &'a GameEvent> + 'a {
        self.events.iter().filter(move |e| pred(e))
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// An `EventLog` the caller can keep reading after handing it to a game.
pub type SharedEventLog = Rc<RefCell<EventLog>>;

impl<O: GameObserver + ?Sized> GameObserver for Rc<RefCell<O>> {
    fn on_event(&mut self, event: &GameEvent) {
        self.borrow_mut().on_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_event(&GameEvent::TurnStarted { round: 1, player: PlayerId(0) });
        log.on_event(&GameEvent::DiceRolled { player: PlayerId(0), roll: 7 });

        assert_eq!(log.events().len(), 2);
        assert_eq!(
            log.matching(|e| matches!(e, GameEvent::DiceRolled { .. })).count(),
            1
        );

        log.clear();
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_shared_log_sees_events() {
        let shared: SharedEventLog = Rc::default();
        let mut handle: Box<dyn GameObserver> = Box::new(Rc::clone(&shared));

        handle.on_event(&GameEvent::DiceRolled { player: PlayerId(1), roll: 4 });

        assert_eq!(shared.borrow().events().len(), 1);
    }
}
