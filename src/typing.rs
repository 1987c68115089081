pub const START_DELAY_MS: u32 = 1_000;
pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;
pub const HOLD_DELAY_MS: u32 = 2_000;
pub const ADVANCE_DELAY_MS: u32 = 500;

pub struct TypingEffect {
    titles: Vec<String>,
    index: usize,
    chars: usize,
    deleting: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

impl TypingEffect {
    pub fn new(titles: Vec<String>) -> Option<Self> {
        if titles.is_empty() {
            return None;
        }

        Some(Self {
            titles,
            index: 0,
            chars: 0,
            deleting: false,
        })
    }

    pub fn title_index(&self) -> usize {
        self.index
    }

    pub fn step(&mut self) -> TypingFrame {
        let title = &self.titles[self.index];
        let title_chars = title.chars().count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(title_chars);
        }

        let text: String = title.chars().take(self.chars).collect();
        let mut delay_ms = if self.deleting {
            DELETE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        };

        if !self.deleting && self.chars == title_chars {
            delay_ms = HOLD_DELAY_MS;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.titles.len();
            delay_ms = ADVANCE_DELAY_MS;
        }

        TypingFrame { text, delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(titles: &[&str]) -> TypingEffect {
        TypingEffect::new(titles.iter().map(|t| t.to_string()).collect())
            .expect("non-empty titles")
    }

    #[test]
    fn empty_title_list_is_rejected() {
        assert!(TypingEffect::new(Vec::new()).is_none());
    }

    #[test]
    fn types_one_character_per_step() {
        let mut fx = effect(&["Dev"]);

        assert_eq!(fx.step().text, "D");
        assert_eq!(fx.step().text, "De");
        assert_eq!(fx.step().text, "Dev");
    }

    #[test]
    fn holds_at_full_length_then_deletes() {
        let mut fx = effect(&["Hi"]);

        assert_eq!(fx.step().delay_ms, TYPE_DELAY_MS);
        let full = fx.step();
        assert_eq!(full.text, "Hi");
        assert_eq!(full.delay_ms, HOLD_DELAY_MS);

        let deleting = fx.step();
        assert_eq!(deleting.text, "H");
        assert_eq!(deleting.delay_ms, DELETE_DELAY_MS);
    }

    #[test]
    fn advances_after_deleting_to_empty() {
        let mut fx = effect(&["Hi", "Yo"]);

        fx.step();
        fx.step();
        fx.step();
        let empty = fx.step();
        assert_eq!(empty.text, "");
        assert_eq!(empty.delay_ms, ADVANCE_DELAY_MS);
        assert_eq!(fx.title_index(), 1);
        assert_eq!(fx.step().text, "Y");
    }

    #[test]
    fn full_cycle_over_two_titles_returns_to_first() {
        let mut fx = effect(&["A", "BB"]);

        // "A": type, hold happens on the same step, delete to empty, advance.
        let full = fx.step();
        assert_eq!(full.text, "A");
        assert_eq!(full.delay_ms, HOLD_DELAY_MS);
        assert_eq!(fx.step().text, "");
        assert_eq!(fx.title_index(), 1);

        // "BB": two typing steps, the second holds, two deleting steps.
        assert_eq!(fx.step().text, "B");
        let full = fx.step();
        assert_eq!(full.text, "BB");
        assert_eq!(full.delay_ms, HOLD_DELAY_MS);
        assert_eq!(fx.step().text, "B");
        assert_eq!(fx.step().text, "");
        assert_eq!(fx.title_index(), 0);
    }

    #[test]
    fn wraps_cyclically_forever() {
        let mut fx = effect(&["ab", "c"]);
        for _ in 0..200 {
            fx.step();
        }
        assert!(fx.title_index() < 2);
    }

    #[test]
    fn multibyte_titles_slice_on_char_boundaries() {
        let mut fx = effect(&["héllo"]);

        assert_eq!(fx.step().text, "h");
        assert_eq!(fx.step().text, "hé");
    }
}
