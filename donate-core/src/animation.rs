use std::{collections::VecDeque, ops::Deref, time::Duration};

use crate::{Spring, Transition};

/// One leg of an [`Animatable`] run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    Tween { target: f32, transition: Transition },
    Spring { target: f32, spring: Spring },
}

impl Motion {
    pub const fn tween(target: f32, transition: Transition) -> Self {
        Self::Tween { target, transition }
    }

    pub const fn spring(target: f32, spring: Spring) -> Self {
        Self::Spring { target, spring }
    }
}

/// Identifies a run started by [`Animatable::animate_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Launch {
    pub ticket: Ticket,

    /// The run this launch replaced, its completion will never be reported.
    pub interrupted: Option<Ticket>,
}

struct Run {
    ticket:  Ticket,
    motions: VecDeque<Motion>,
    start:   f32,
    origin:  f32,
    time:    f32,
}

/// An `f32` driven imperatively through sequences of [`Motion`]s.
///
/// Only one run is active at a time, launching a new run interrupts the
/// current one. Velocity carries over between runs and between the motions
/// of a run, springs pick it up.
pub struct Animatable {
    value:    f32,
    velocity: f32,
    run:      Option<Run>,
    next:     u64,
}

impl Animatable {
    pub const fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            run: None,
            next: 0,
        }
    }

    pub const fn get(&self) -> f32 {
        self.value
    }

    pub const fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn animate_to(&mut self, motion: Motion) -> Launch {
        self.animate_through([motion])
    }

    /// Run `motions` back to back.
    pub fn animate_through(&mut self, motions: impl IntoIterator<Item = Motion>) -> Launch {
        let ticket = Ticket(self.next);
        self.next += 1;

        let interrupted = self.run.take().map(|run| run.ticket);

        if let Some(interrupted) = interrupted {
            tracing::debug!(?interrupted, ?ticket, "animation interrupted");
        }

        self.run = Some(Run {
            ticket,
            motions: motions.into_iter().collect(),
            start: self.value,
            origin: self.velocity,
            time: 0.0,
        });

        Launch {
            ticket,
            interrupted,
        }
    }

    /// Advance the current run by `dt`.
    ///
    /// Returns the run's ticket on the tick it finishes.
    pub fn animate(&mut self, dt: Duration) -> Option<Ticket> {
        let run = self.run.as_mut()?;
        let mut remaining = dt.as_secs_f32();
        let previous = self.value;

        loop {
            let Some(motion) = run.motions.front().copied() else {
                let ticket = run.ticket;
                self.run = None;

                return Some(ticket);
            };

            run.time += remaining;

            match motion {
                Motion::Tween { target, transition } => {
                    if run.time < transition.total() {
                        let position = transition.progress(run.time);
                        self.value = run.start + (target - run.start) * position;

                        if dt > Duration::ZERO {
                            self.velocity = (self.value - previous) / dt.as_secs_f32();
                        }

                        return None;
                    }

                    remaining = run.time - transition.total();
                    self.value = target;
                    self.velocity = (target - run.start) * transition.end_rate();
                }

                Motion::Spring { target, spring } => {
                    let (x, v) = spring.sample(run.start - target, run.origin, run.time);

                    if !spring.is_at_rest(x, v) {
                        self.value = target + x;
                        self.velocity = v;

                        return None;
                    }

                    // leftover time is not tracked past a spring's rest point
                    remaining = 0.0;
                    self.value = target;
                    self.velocity = 0.0;
                }
            }

            run.motions.pop_front();
            run.start = self.value;
            run.origin = self.velocity;
            run.time = 0.0;
        }
    }
}

impl Deref for Animatable {
    type Target = f32;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
