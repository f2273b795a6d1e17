use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ReportValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Flag(flag) => write!(f, "{}", flag),
            // Debug keeps the trailing ".0" on whole versions
            ReportValue::Number(number) => write!(f, "{:?}", number),
            ReportValue::Text(text) => f.write_str(text),
        }
    }
}

/// Flat name/value snapshot of a cartridge, in a fixed order.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderReport {
    entries: Vec<(&'static str, ReportValue)>,
}

impl HeaderReport {
    pub(crate) fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: ReportValue) {
        self.entries.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&ReportValue> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ReportValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
