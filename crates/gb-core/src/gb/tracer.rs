use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::Mutex;

#[doc(hidden)]
pub mod macros;
pub mod traceable;
pub use traceable::Traceable;

pub static TRACER: Lazy<Mutex<Tracer>> = Lazy::new(|| Mutex::new(Tracer::new(100_000)));

/// Global ring buffer of trace lines. Oldest lines are dropped once full.
pub struct Tracer {
    history: VecDeque<String>,
    capacity: usize,
}

impl Tracer {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    pub fn write(&mut self, msg: String) {
        if self.capacity == 0 {
            return;
        }
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(msg);
    }

    /// Numbered history, one line per entry.
    pub fn dump(&self) -> String {
        self.history
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{:04}: {}\n", i, line))
            .collect()
    }

    pub fn log<T: Traceable>(&mut self, thing: &T) {
        if let Some(trace) = thing.trace() {
            self.write(trace);
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gb::cpu::Registers;

    #[test]
    fn ring_buffer_drops_oldest() {
        let mut tracer = Tracer::new(2);
        tracer.write("one".into());
        tracer.write("two".into());
        tracer.write("three".into());
        assert_eq!(tracer.lines().collect::<Vec<_>>(), vec!["two", "three"]);
        assert_eq!(tracer.dump(), "0000: two\n0001: three\n");
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut tracer = Tracer::new(0);
        tracer.write("lost".into());
        assert!(tracer.is_empty());
    }

    #[test]
    fn logs_traceable_state() {
        let mut tracer = Tracer::new(8);
        let mut regs = Registers::new();
        regs.pc = 0x0150;
        tracer.log(&regs);
        assert_eq!(tracer.len(), 1);
        assert!(tracer.lines().next().unwrap().starts_with("CPU PC:0150"));
        tracer.clear();
        assert!(tracer.is_empty());
    }
}
