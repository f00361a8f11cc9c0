//! Simulation loop.
//!
//! The loop owns the grid and the generation counter. Everything that touches
//! the outside world (drawing frames, waiting, reading keys) is passed in as a
//! capability so the loop can be driven headless in tests.

use std::time::Duration;

use anyhow::Result;

use crate::core::{seed, Grid, LifeError};
use crate::step::advance;
use crate::types::LifeConfig;

/// Receives each generation for display.
pub trait FrameSink {
    fn present(&mut self, grid: &Grid, generation: u64) -> Result<()>;
}

/// Non-blocking check for a pending stop request.
pub trait InputPoller {
    fn stop_requested(&mut self) -> Result<bool>;
}

/// Waits between generations.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Poller that never asks to stop.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverStop;

impl InputPoller for NeverStop {
    fn stop_requested(&mut self) -> Result<bool> {
        Ok(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    LimitReached,
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Generation counter when the loop ended.
    pub generations: u64,
    pub reason: StopReason,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    delay: Duration,
    max_generations: u64,
}

impl Simulation {
    /// Wrap an already populated grid.
    pub fn new(grid: Grid, config: &LifeConfig) -> Self {
        Self {
            grid,
            generation: 0,
            delay: config.delay(),
            max_generations: config.max_generations,
        }
    }

    /// Allocate a grid of the configured size and seed it with the configured pattern.
    pub fn from_config(config: &LifeConfig) -> Result<Self, LifeError> {
        let mut grid = Grid::new(config.width, config.height)?;
        seed(&mut grid, config.pattern)?;
        Ok(Self::new(grid, config))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// False once a non-zero generation limit has been reached.
    pub fn should_continue(&self) -> bool {
        self.max_generations == 0 || self.generation < self.max_generations
    }

    /// Advance one generation without presenting or pausing.
    pub fn step(&mut self) -> Result<(), LifeError> {
        advance(&mut self.grid)?;
        self.generation += 1;
        Ok(())
    }

    /// Run until the generation limit is reached or `input` asks to stop.
    ///
    /// Each cycle presents the current generation, advances the grid, pauses,
    /// then polls for a stop request. A stop request is only seen at that
    /// checkpoint, so the generation computed just before it is kept but not
    /// counted.
    pub fn run<S, I, P>(&mut self, sink: &mut S, input: &mut I, pacer: &mut P) -> Result<RunOutcome>
    where
        S: FrameSink + ?Sized,
        I: InputPoller + ?Sized,
        P: Pacer + ?Sized,
    {
        log::info!(
            "starting simulation: {}x{}, delay {:?}, limit {}",
            self.grid.width(),
            self.grid.height(),
            self.delay,
            self.max_generations
        );

        while self.should_continue() {
            sink.present(&self.grid, self.generation)?;
            advance(&mut self.grid)?;
            pacer.pause(self.delay);

            if input.stop_requested()? {
                log::info!("stop requested at generation {}", self.generation);
                return Ok(RunOutcome {
                    generations: self.generation,
                    reason: StopReason::Interrupted,
                });
            }

            self.generation += 1;
            log::debug!(
                "generation {} population {}",
                self.generation,
                self.grid.population()
            );
        }

        log::info!("generation limit {} reached", self.max_generations);
        Ok(RunOutcome {
            generations: self.generation,
            reason: StopReason::LimitReached,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pattern;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(u64, Grid)>,
    }

    impl FrameSink for Recorder {
        fn present(&mut self, grid: &Grid, generation: u64) -> Result<()> {
            self.frames.push((generation, grid.clone()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingPacer {
        pauses: Vec<Duration>,
    }

    impl Pacer for CountingPacer {
        fn pause(&mut self, delay: Duration) {
            self.pauses.push(delay);
        }
    }

    /// Asks to stop on the n-th poll (1-based).
    struct StopAfter {
        polls: u32,
        stop_on: u32,
    }

    impl InputPoller for StopAfter {
        fn stop_requested(&mut self) -> Result<bool> {
            self.polls += 1;
            Ok(self.polls >= self.stop_on)
        }
    }

    fn config(limit: u64) -> LifeConfig {
        LifeConfig::default()
            .with_pattern(Pattern::Blinker)
            .with_delay_ms(25)
            .with_max_generations(limit)
    }

    #[test]
    fn limit_of_three_runs_three_cycles() {
        let mut sim = Simulation::from_config(&config(3)).unwrap();
        let mut sink = Recorder::default();
        let mut pacer = CountingPacer::default();

        let outcome = sim.run(&mut sink, &mut NeverStop, &mut pacer).unwrap();

        assert_eq!(
            outcome,
            RunOutcome {
                generations: 3,
                reason: StopReason::LimitReached
            }
        );
        let generations: Vec<u64> = sink.frames.iter().map(|(g, _)| *g).collect();
        assert_eq!(generations, vec![0, 1, 2]);
        assert_eq!(pacer.pauses, vec![Duration::from_millis(25); 3]);
        assert_eq!(sim.generation(), 3);
        assert!(!sim.should_continue());
    }

    #[test]
    fn stop_request_ends_unlimited_run() {
        let mut sim = Simulation::from_config(&config(0)).unwrap();
        let mut sink = Recorder::default();
        let mut input = StopAfter {
            polls: 0,
            stop_on: 2,
        };

        let outcome = sim
            .run(&mut sink, &mut input, &mut CountingPacer::default())
            .unwrap();

        assert_eq!(outcome.reason, StopReason::Interrupted);
        assert_eq!(outcome.generations, 1);
        assert_eq!(sink.frames.len(), 2);
    }

    #[test]
    fn stop_request_does_not_outlast_limit() {
        let mut sim = Simulation::from_config(&config(5)).unwrap();
        let mut input = StopAfter {
            polls: 0,
            stop_on: 1,
        };
        let outcome = sim
            .run(&mut Recorder::default(), &mut input, &mut CountingPacer::default())
            .unwrap();
        assert_eq!(outcome.reason, StopReason::Interrupted);
        assert_eq!(outcome.generations, 0);
    }

    #[test]
    fn frames_show_grid_before_each_advance() {
        let mut sim = Simulation::from_config(&config(2)).unwrap();
        let start = sim.grid().clone();
        let mut sink = Recorder::default();
        sim.run(&mut sink, &mut NeverStop, &mut CountingPacer::default())
            .unwrap();

        assert_eq!(sink.frames[0].1, start);
        assert_ne!(sink.frames[1].1, start);
        // Blinker has period 2.
        assert_eq!(sim.grid(), &start);
    }

    #[test]
    fn step_counts_generations() {
        let mut sim = Simulation::from_config(&config(0)).unwrap();
        sim.step().unwrap();
        sim.step().unwrap();
        assert_eq!(sim.generation(), 2);
        assert!(sim.should_continue());
    }

    #[test]
    fn sink_errors_abort_the_run() {
        struct Broken;
        impl FrameSink for Broken {
            fn present(&mut self, _: &Grid, _: u64) -> Result<()> {
                anyhow::bail!("stdout closed")
            }
        }

        let mut sim = Simulation::from_config(&config(0)).unwrap();
        let err = sim
            .run(&mut Broken, &mut NeverStop, &mut CountingPacer::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "stdout closed");
        assert_eq!(sim.generation(), 0);
    }
}
