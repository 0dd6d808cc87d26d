use crate::lexer::instruction::Opcode;

mod report;

pub use report::*;

/// Code statistics collected while parsing. Read-only once the parser hands it out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub instructions: usize,
    pub comments: usize,
    pub labels: usize,
    pub back_jumps: usize,
    pub forward_jumps: usize,
    pub bad_jumps: usize,
    // First-seen order, sorted only when asked for.
    frequency: Vec<(Opcode, usize)>,
}

impl Stats {
    pub fn jumps(&self) -> usize {
        self.back_jumps + self.forward_jumps + self.bad_jumps
    }

    pub(crate) fn record_opcode(&mut self, opcode: Opcode) {
        match self.frequency.iter_mut().find(|(op, _)| *op == opcode) {
            Some((_, count)) => *count += 1,
            None => self.frequency.push((opcode, 1)),
        }
    }

    /// Opcode histogram, most frequent first. Ties keep first-seen order.
    pub fn frequency(&self) -> Vec<(Opcode, usize)> {
        let mut frequency = self.frequency.clone();
        frequency.sort_by(|a, b| b.1.cmp(&a.1));
        frequency
    }

    /// Comma-separated opcode names, most frequent first.
    pub fn frequent(&self) -> String {
        self.frequency()
            .iter()
            .map(|(opcode, _)| opcode.name())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_is_stable_on_ties() {
        let mut stats = Stats::default();
        for op in [
            Opcode::WRITE,
            Opcode::DEFVAR,
            Opcode::MOVE,
            Opcode::DEFVAR,
            Opcode::MOVE,
            Opcode::BREAK,
        ] {
            stats.record_opcode(op);
        }

        assert_eq!(
            stats.frequency(),
            vec![
                (Opcode::DEFVAR, 2),
                (Opcode::MOVE, 2),
                (Opcode::WRITE, 1),
                (Opcode::BREAK, 1),
            ]
        );
        assert_eq!(stats.frequent(), "DEFVAR,MOVE,WRITE,BREAK");
    }

    #[test]
    fn empty() {
        let stats = Stats::default();
        assert_eq!(stats.jumps(), 0);
        assert_eq!(stats.frequent(), "");
    }
}
