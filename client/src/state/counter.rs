#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Click counter state. Independent of the roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub count: u32,
}

impl CounterState {
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}
