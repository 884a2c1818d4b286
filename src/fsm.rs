use crate::scheduler::Updatable;

/// A state in the machine, generic over the input type driving transitions.
///
/// Lifecycle: `awake` runs once when the state becomes current, `execute`
/// runs every tick while it is current, and `sleep` runs once when it is
/// replaced. `transition` inspects an input and either names the next state
/// or returns `None` to stay put; there is no sentinel input value.
pub trait State<I> {
    /// State name for logging and assertions.
    fn name(&self) -> &'static str;

    fn awake(&mut self) {}

    fn execute(&mut self) {}

    fn sleep(&mut self) {}

    fn transition(&self, input: &I) -> Option<Box<dyn State<I>>>;
}

/// Transition-driven state container owning its current state.
pub struct StateMachine<I> {
    current: Box<dyn State<I>>,
}

impl<I> StateMachine<I> {
    /// The initial state is awoken immediately.
    pub fn new(initial: impl State<I> + 'static) -> Self {
        let mut current: Box<dyn State<I>> = Box::new(initial);
        current.awake();
        Self { current }
    }

    /// Run the current state's per-tick logic.
    pub fn update(&mut self) {
        self.current.execute();
    }

    /// Offer an input to the current state. When it names a successor, the
    /// outgoing state sleeps, the machine switches, and the incoming state
    /// awakes. Returns whether a transition happened; an unhandled input has
    /// no side effects.
    pub fn handle(&mut self, input: &I) -> bool {
        match self.current.transition(input) {
            Some(next) => {
                tracing::debug!(from = self.current.name(), to = next.name(), "state transition");
                self.current.sleep();
                self.current = next;
                self.current.awake();
                true
            }
            None => false,
        }
    }

    pub fn current_state_name(&self) -> &'static str {
        self.current.name()
    }

    pub fn is_in_state(&self, name: &str) -> bool {
        self.current.name() == name
    }
}

impl<I> Updatable for StateMachine<I> {
    fn tick(&mut self, _dt: f32) {
        self.update();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    enum Event {
        SeeTarget,
        LoseTarget,
        Noise,
    }

    struct Patrol {
        log: Log,
    }

    impl State<Event> for Patrol {
        fn name(&self) -> &'static str {
            "Patrol"
        }

        fn awake(&mut self) {
            self.log.borrow_mut().push("patrol:awake");
        }

        fn execute(&mut self) {
            self.log.borrow_mut().push("patrol:execute");
        }

        fn sleep(&mut self) {
            self.log.borrow_mut().push("patrol:sleep");
        }

        fn transition(&self, input: &Event) -> Option<Box<dyn State<Event>>> {
            match input {
                Event::SeeTarget => Some(Box::new(Chase {
                    log: Rc::clone(&self.log),
                })),
                _ => None,
            }
        }
    }

    struct Chase {
        log: Log,
    }

    impl State<Event> for Chase {
        fn name(&self) -> &'static str {
            "Chase"
        }

        fn awake(&mut self) {
            self.log.borrow_mut().push("chase:awake");
        }

        fn execute(&mut self) {
            self.log.borrow_mut().push("chase:execute");
        }

        fn sleep(&mut self) {
            self.log.borrow_mut().push("chase:sleep");
        }

        fn transition(&self, input: &Event) -> Option<Box<dyn State<Event>>> {
            match input {
                Event::LoseTarget => Some(Box::new(Patrol {
                    log: Rc::clone(&self.log),
                })),
                _ => None,
            }
        }
    }

    fn machine() -> (StateMachine<Event>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let machine = StateMachine::new(Patrol {
            log: Rc::clone(&log),
        });
        (machine, log)
    }

    #[test]
    fn test_initial_state_is_awoken() {
        let (machine, log) = machine();

        assert_eq!(machine.current_state_name(), "Patrol");
        assert_eq!(*log.borrow(), vec!["patrol:awake"]);
    }

    #[test]
    fn test_update_runs_execute() {
        let (mut machine, log) = machine();
        machine.update();
        machine.update();

        assert_eq!(
            *log.borrow(),
            vec!["patrol:awake", "patrol:execute", "patrol:execute"]
        );
    }

    #[test]
    fn test_unhandled_input_has_no_side_effects() {
        let (mut machine, log) = machine();

        assert!(!machine.handle(&Event::Noise));
        assert!(machine.is_in_state("Patrol"));
        assert_eq!(*log.borrow(), vec!["patrol:awake"]);
    }

    #[test]
    fn test_transition_runs_sleep_then_awake() {
        let (mut machine, log) = machine();

        assert!(machine.handle(&Event::SeeTarget));
        assert!(machine.is_in_state("Chase"));
        assert_eq!(
            *log.borrow(),
            vec!["patrol:awake", "patrol:sleep", "chase:awake"]
        );
    }

    #[test]
    fn test_round_trip_transitions() {
        let (mut machine, _log) = machine();

        machine.handle(&Event::SeeTarget);
        // An input the current state ignores keeps it current.
        machine.handle(&Event::SeeTarget);
        assert!(machine.is_in_state("Chase"));

        machine.handle(&Event::LoseTarget);
        assert!(machine.is_in_state("Patrol"));
    }

    #[test]
    fn test_machine_ticks_as_updatable() {
        let (mut machine, log) = machine();

        machine.tick(0.016);

        assert_eq!(*log.borrow(), vec!["patrol:awake", "patrol:execute"]);
    }
}
