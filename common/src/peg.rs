use std::fmt::Display;

pub const NR_PEGS: usize = 3;

/// One of the three pegs.
///
/// Invariant: can only represent the labels 0, 1 and 2
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct PegId(u8);

impl PegId {
    pub fn new(label: u8) -> Option<Self> {
        if (label as usize) < NR_PEGS {
            Some(PegId(label))
        } else {
            None
        }
    }

    pub const fn left() -> Self {
        PegId(0)
    }
    pub const fn middle() -> Self {
        PegId(1)
    }
    pub const fn right() -> Self {
        PegId(2)
    }

    pub fn all() -> impl IntoIterator<Item = Self> {
        (0..NR_PEGS as u8).map(PegId)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn label(self) -> u8 {
        self.0
    }
}

impl Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_labels() {
        let labels: Vec<u8> = PegId::all().into_iter().map(PegId::label).collect();
        assert_eq!(labels, vec![0, 1, 2]);
        assert_eq!(PegId::new(3), None);
        assert_eq!(PegId::new(255), None);
    }
}
