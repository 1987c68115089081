pub const TICK_MS: u32 = 16;
pub const DURATION_MS: f64 = 2000.0;

pub struct CounterAnimation {
    target: i32,
    current: f64,
    step: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterTick {
    Running(i32),
    Done(i32),
}

impl CounterAnimation {
    pub fn new(target: i32) -> Self {
        Self {
            target,
            current: 0.0,
            step: f64::from(target) / (DURATION_MS / f64::from(TICK_MS)),
        }
    }

    pub fn tick(&mut self) -> CounterTick {
        self.current += self.step;
        if self.current >= f64::from(self.target) {
            self.current = f64::from(self.target);
            CounterTick::Done(self.target)
        } else {
            CounterTick::Running(self.current.floor() as i32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(target: i32) -> (i32, usize) {
        let mut animation = CounterAnimation::new(target);
        // Generous upper bound so a broken animation cannot loop forever.
        for ticks in 1..=10_000 {
            match animation.tick() {
                CounterTick::Running(value) => {
                    assert!(value < target, "overshoot before completion for {target}");
                }
                CounterTick::Done(value) => return (value, ticks),
            }
        }
        panic!("counter for {target} never completed");
    }

    #[test]
    fn final_value_is_exact_target() {
        for target in [1, 7, 150, 999, 12_345] {
            let (value, _) = run_to_completion(target);
            assert_eq!(value, target);
        }
    }

    #[test]
    fn completes_in_roughly_the_configured_duration() {
        let expected_ticks = (DURATION_MS / f64::from(TICK_MS)) as usize;
        let (_, ticks) = run_to_completion(500);
        assert!(ticks <= expected_ticks + 1);
        assert!(ticks >= expected_ticks - 1);
    }

    #[test]
    fn zero_target_completes_immediately() {
        let mut animation = CounterAnimation::new(0);
        assert_eq!(animation.tick(), CounterTick::Done(0));
    }

    #[test]
    fn displayed_values_never_decrease() {
        let mut animation = CounterAnimation::new(73);
        let mut last = 0;
        loop {
            match animation.tick() {
                CounterTick::Running(value) => {
                    assert!(value >= last);
                    last = value;
                }
                CounterTick::Done(value) => {
                    assert!(value >= last);
                    break;
                }
            }
        }
    }
}
