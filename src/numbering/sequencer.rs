//! Sequencer: per-level counters and label composition
//!
//! A [`Sequencer`] is one numbering session. It owns the resolved options and a
//! counter per tracked level, where a counter holds the last sequence number
//! emitted at that level.
//!
//! # Advancing
//!
//! `new_item(level)` walks every tracked level in ascending order:
//!
//! - shallower levels still at zero are forced to 1, so an ancestor never
//!   renders as "0" when a deep level is requested first
//! - the requested level is incremented and its new value is emitted
//! - deeper levels are reset to zero
//!
//! # Composition
//!
//! ```text
//! regular:  <prefix><indentation × (level-1)><numeral><tail><suffix>
//! full:     <prefix><ancestor>.<ancestor>.<numeral>.<suffix>
//! ```
//!
//! With the outline preset, `1, 2, 3, 2, 1, 2` yields:
//!
//! ```text
//! A.
//!     1.
//!         a.
//!     2.
//! B.
//!     1.
//! ```

use super::error::{NumberingError, Result};
use super::options::{NumberingOptions, LEVEL_COUNT};
use std::cmp::Ordering;
use tracing::{debug, trace, warn};

/// Deepest level the lenient API tracks; deeper requests are numbered at this level
pub const MAX_DEPTH: usize = 64;

/// One numbering session
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    options: NumberingOptions,
    /// Last emitted value per level; index 0 is level 1
    counters: Vec<u32>,
}

impl Sequencer {
    /// Create a session with the given options
    pub fn new(options: NumberingOptions) -> Self {
        let mut sequencer = Self::default();
        sequencer.start(options);
        sequencer
    }

    /// Restart the session with new options, clearing every counter
    pub fn start(&mut self, options: NumberingOptions) {
        debug!(
            levels = ?options.levels.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            full = options.full,
            indented = options.indentation.is_some(),
            "starting numbering session"
        );
        self.options = options;
        self.counters.clear();
    }

    /// Clear every counter, keeping the current options
    pub fn reset(&mut self) {
        self.counters.clear();
    }

    pub fn options(&self) -> &NumberingOptions {
        &self.options
    }

    /// Number of levels tracked so far
    pub fn depth(&self) -> usize {
        self.counters.len()
    }

    /// Last sequence number emitted at a level (0 when untracked or reset)
    pub fn counter(&self, level: usize) -> u32 {
        level
            .checked_sub(1)
            .and_then(|i| self.counters.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Produce the next label at `level`
    ///
    /// Never fails: level 0 is treated as level 1, levels deeper than the
    /// styled ones render as decimal with a `.` tail, and levels beyond
    /// [`MAX_DEPTH`] are numbered at `MAX_DEPTH`.
    pub fn new_item(&mut self, level: usize) -> String {
        let level = if level == 0 {
            warn!("level 0 requested, numbering at level 1");
            1
        } else if level > MAX_DEPTH {
            warn!(
                level,
                max = MAX_DEPTH,
                "level too deep, numbering at the deepest tracked level"
            );
            MAX_DEPTH
        } else {
            level
        };

        self.ensure_counters(level);
        let sequence = self.advance(level);
        let label = self.compose(level, sequence);
        trace!(level, sequence, label = %label, "new item");
        label
    }

    /// Like [`new_item`](Self::new_item), but rejects levels outside `1..=5`
    pub fn try_new_item(&mut self, level: usize) -> Result<String> {
        if level == 0 || level > LEVEL_COUNT {
            return Err(NumberingError::InvalidLevel {
                level,
                max: LEVEL_COUNT,
            });
        }
        Ok(self.new_item(level))
    }

    /// Track every level from 1 up to `level`
    fn ensure_counters(&mut self, level: usize) {
        if self.counters.len() < level {
            self.counters.resize(level, 0);
        }
    }

    /// Advance `level`, fix up ancestors and reset descendants; returns the emitted value
    fn advance(&mut self, level: usize) -> u32 {
        let mut sequence = 0;

        for (index, counter) in self.counters.iter_mut().enumerate() {
            let tracked = index + 1;
            match tracked.cmp(&level) {
                Ordering::Less => {
                    if *counter == 0 {
                        warn!(
                            ancestor = tracked,
                            level, "ancestor level was never numbered, forcing it to 1"
                        );
                        *counter = 1;
                    }
                }
                Ordering::Equal => {
                    *counter = counter.saturating_add(1);
                    sequence = *counter;
                }
                Ordering::Greater => *counter = 0,
            }
        }

        sequence
    }

    fn compose(&self, level: usize, sequence: u32) -> String {
        let body = if self.options.full {
            // full paths always end in '.', whatever the level's own tail
            let mut path = String::new();
            for ancestor in 1..=level {
                let value = if ancestor == level {
                    sequence
                } else {
                    self.counter(ancestor)
                };
                path.push_str(&self.options.style(ancestor).numeral(value));
                path.push('.');
            }
            path
        } else {
            let own = self.options.style(level).label(sequence);
            match &self.options.indentation {
                Some(indentation) if level > 1 => indentation.repeat(level - 1) + &own,
                _ => own,
            }
        };

        format!("{}{}{}", self.options.prefix, body, self.options.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(sequencer: &mut Sequencer, levels: &[usize]) -> Vec<String> {
        levels.iter().map(|&l| sequencer.new_item(l)).collect()
    }

    #[test]
    fn test_decimal_sequence() {
        let mut seq = Sequencer::default();
        assert_eq!(labels(&mut seq, &[1, 1, 1]), vec!["1.", "2.", "3."]);
    }

    #[test]
    fn test_upper_alpha_sequence() {
        let mut seq = Sequencer::new(NumberingOptions::default().with_level(1, "A"));
        assert_eq!(seq.new_item(1), "A.");
        assert_eq!(seq.new_item(1), "B.");
    }

    #[test]
    fn test_deeper_level_resets_when_ancestor_advances() {
        let mut seq = Sequencer::new(NumberingOptions::outline());
        assert_eq!(
            labels(&mut seq, &[1, 2, 1, 2]),
            vec!["A.", "    1.", "B.", "    1."]
        );
        assert_eq!(seq.counter(1), 2);
        assert_eq!(seq.counter(2), 1);
    }

    #[test]
    fn test_full_mode_paths() {
        let options = NumberingOptions::default()
            .with_level(1, "A")
            .with_level(2, "1")
            .with_level(3, "a")
            .with_full(true);
        let mut seq = Sequencer::new(options);
        assert_eq!(labels(&mut seq, &[1, 2, 3]), vec!["A.", "A.1.", "A.1.a."]);
        assert_eq!(seq.new_item(3), "A.1.b.");
        assert_eq!(seq.new_item(2), "A.2.");
        assert_eq!(seq.new_item(3), "A.2.a.");
    }

    #[test]
    fn test_full_mode_ends_in_dot_and_ignores_indentation() {
        let options = NumberingOptions::outline().with_full(true);
        let mut seq = Sequencer::new(options);
        assert_eq!(
            labels(&mut seq, &[1, 2, 3, 4, 5]),
            vec!["A.", "A.1.", "A.1.a.", "A.1.a.i.", "A.1.a.i.1."]
        );
    }

    #[test]
    fn test_full_mode_ignores_custom_tails() {
        let options = NumberingOptions::default()
            .with_level(1, "I)")
            .with_level(2, "a>")
            .with_full(true);
        let mut seq = Sequencer::new(options);
        assert_eq!(labels(&mut seq, &[1, 2, 2]), vec!["I.", "I.a.", "I.b."]);
    }

    #[test]
    fn test_ancestor_forced_to_one() {
        let mut seq = Sequencer::new(NumberingOptions::outline().with_full(true));
        assert_eq!(seq.new_item(3), "A.1.a.");
        assert_eq!(seq.counter(1), 1);
        assert_eq!(seq.counter(2), 1);
        // the corrected ancestors continue from 1
        assert_eq!(seq.new_item(1), "B.");
        assert_eq!(seq.new_item(2), "B.1.");
    }

    #[test]
    fn test_descendants_zeroed() {
        let mut seq = Sequencer::default();
        labels(&mut seq, &[1, 2, 3, 3]);
        assert_eq!(seq.counter(3), 2);
        seq.new_item(2);
        assert_eq!(seq.counter(3), 0);
        assert_eq!(seq.depth(), 3);
    }

    #[test]
    fn test_indentation_disabled() {
        let mut seq = Sequencer::new(NumberingOptions::outline().without_indentation());
        assert_eq!(labels(&mut seq, &[1, 2, 3]), vec!["A.", "1.", "a."]);
    }

    #[test]
    fn test_custom_indentation_and_affixes() {
        let options = NumberingOptions::outline()
            .with_indentation("\t")
            .with_prefix("[")
            .with_suffix("]");
        let mut seq = Sequencer::new(options);
        assert_eq!(seq.new_item(1), "[A.]");
        assert_eq!(seq.new_item(3), "[\t\ta.]");
    }

    #[test]
    fn test_levels_beyond_five_are_decimal() {
        let mut seq = Sequencer::new(NumberingOptions::outline().without_indentation());
        seq.new_item(5);
        assert_eq!(seq.new_item(6), "1.");
        assert_eq!(seq.new_item(6), "2.");
    }

    #[test]
    fn test_huge_level_is_capped() {
        let mut seq = Sequencer::new(NumberingOptions::default().without_indentation());
        assert_eq!(seq.new_item(usize::MAX), "1.");
        assert_eq!(seq.depth(), MAX_DEPTH);
        assert_eq!(seq.new_item(usize::MAX), "2.");
        assert_eq!(seq.counter(MAX_DEPTH), 2);
        assert_eq!(seq.new_item(1), "2.");
    }

    #[test]
    fn test_huge_level_indentation_is_bounded() {
        let mut seq = Sequencer::default();
        let label = seq.new_item(usize::MAX);
        assert_eq!(label, format!("{}1.", "    ".repeat(MAX_DEPTH - 1)));
    }

    #[test]
    fn test_level_zero_is_level_one() {
        let mut seq = Sequencer::default();
        assert_eq!(seq.new_item(0), "1.");
        assert_eq!(seq.new_item(1), "2.");
    }

    #[test]
    fn test_try_new_item_rejects_out_of_range() {
        let mut seq = Sequencer::default();
        assert_eq!(
            seq.try_new_item(0),
            Err(NumberingError::InvalidLevel { level: 0, max: 5 })
        );
        assert_eq!(
            seq.try_new_item(6),
            Err(NumberingError::InvalidLevel { level: 6, max: 5 })
        );
        assert_eq!(seq.depth(), 0);
        assert_eq!(seq.try_new_item(5).unwrap(), "                1.");
    }

    #[test]
    fn test_start_resets_counters() {
        let mut seq = Sequencer::new(NumberingOptions::outline());
        labels(&mut seq, &[1, 1, 2]);
        seq.start(NumberingOptions::outline());
        assert_eq!(seq.depth(), 0);
        assert_eq!(seq.new_item(1), "A.");
    }

    #[test]
    fn test_reset_keeps_options() {
        let mut seq = Sequencer::new(NumberingOptions::outline());
        labels(&mut seq, &[1, 1]);
        seq.reset();
        assert_eq!(seq.new_item(1), "A.");
        assert_eq!(seq.options(), &NumberingOptions::outline());
    }
}
