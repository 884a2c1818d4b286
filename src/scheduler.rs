use std::cell::RefCell;
use std::rc::Rc;

/// Anything the scheduler can drive once per fixed step.
pub trait Updatable {
    fn tick(&mut self, dt: f32);
}

impl<U: Updatable> Updatable for Rc<RefCell<U>> {
    fn tick(&mut self, dt: f32) {
        self.borrow_mut().tick(dt);
    }
}

/// Limit on how many fixed steps one `advance` call may run before the
/// remaining accumulated time is dropped.
const MAX_STEPS_PER_ADVANCE: u32 = 8;

/// Fixed-timestep update dispatcher.
///
/// Owned by whoever runs the outer loop and passed by reference where
/// needed; there is no global instance. Elapsed wall time accumulates until
/// whole steps of `step` seconds can be dispatched to every subscriber.
pub struct Scheduler {
    step: f32,
    accumulator: f32,
    subscribers: Vec<Box<dyn Updatable>>,
}

impl Scheduler {
    pub fn new(step: f32) -> Self {
        debug_assert!(step > 0.0, "step must be positive");
        Self {
            step,
            accumulator: 0.0,
            subscribers: Vec::new(),
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn subscribe(&mut self, subscriber: impl Updatable + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Feed elapsed wall time and run as many whole fixed steps as it covers.
    /// Returns the number of steps dispatched.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_STEPS_PER_ADVANCE {
            for subscriber in &mut self.subscribers {
                subscriber.tick(self.step);
            }
            self.accumulator -= self.step;
            steps += 1;
        }

        if self.accumulator >= self.step {
            tracing::warn!(
                dropped_steps = (self.accumulator / self.step) as u32,
                "scheduler falling behind, dropping accumulated time"
            );
            self.accumulator = 0.0;
        }

        steps
    }
}
