//! Labelled time box

/// Inner width of a card, in characters
const CARD_WIDTH: usize = 12;

/// One labelled clock time, e.g. "MULAI" over "10:00"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeCard<'a> {
    pub label: &'a str,
    pub time: &'a str,
}

impl<'a> TimeCard<'a> {
    pub fn new(label: &'a str, time: &'a str) -> Self {
        Self { label, time }
    }

    /// Draw the card as five lines of equal width
    pub fn lines(&self) -> [String; 5] {
        let border = "─".repeat(CARD_WIDTH);
        [
            format!("┌{}┐", border),
            format!("│{:^width$}│", self.label, width = CARD_WIDTH),
            format!("│{:^width$}│", "", width = CARD_WIDTH),
            format!("│{:^width$}│", self.time, width = CARD_WIDTH),
            format!("└{}┘", border),
        ]
    }
}
