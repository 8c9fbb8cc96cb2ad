//! Fixed UI strings of the artifact.

/// One language's label set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub lang: &'static str,
    pub progress: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub finish: &'static str,
    pub by: &'static str,
    pub no_chapters: &'static str,
    pub quiz: &'static str,
    pub points: &'static str,
    pub flip_hint: &'static str,
    pub prev_card: &'static str,
    pub next_card: &'static str,
    pub rate_prompt: &'static str,
    pub terms: &'static str,
    pub definitions: &'static str,
    pub check: &'static str,
    pub order_correct: &'static str,
    pub order_incorrect: &'static str,
    pub move_up: &'static str,
    pub move_down: &'static str,
    pub listen: &'static str,
    pub days: &'static str,
    pub empty_media: &'static str,
    pub download: &'static str,
    pub close: &'static str,
    pub completed: &'static str,
    pub option_a: &'static str,
    pub option_b: &'static str,
}

pub const ENGLISH: Labels = Labels {
    lang: "en",
    progress: "Progress",
    previous: "← Previous",
    next: "Next →",
    finish: "🏆 Finish",
    by: "by",
    no_chapters: "No chapters yet",
    quiz: "Quiz",
    points: "pts",
    flip_hint: "Tap the card to flip it",
    prev_card: "← Previous",
    next_card: "Next →",
    rate_prompt: "Click a star to rate",
    terms: "Terms",
    definitions: "Definitions",
    check: "Check",
    order_correct: "✅ Correct order!",
    order_incorrect: "❌ Not quite, keep sorting.",
    move_up: "Move up",
    move_down: "Move down",
    listen: "🔊 Listen",
    days: "days",
    empty_media: "No media",
    download: "Download",
    close: "Close",
    completed: "🏆 Congratulations! You finished",
    option_a: "Option A",
    option_b: "Option B",
};

pub const POLISH: Labels = Labels {
    lang: "pl",
    progress: "Postęp",
    previous: "← Poprzedni",
    next: "Następny →",
    finish: "🏆 Ukończ",
    by: "autor:",
    no_chapters: "Brak rozdziałów",
    quiz: "Quiz",
    points: "pkt",
    flip_hint: "Kliknij kartę, by ją odwrócić",
    prev_card: "← Poprzednia",
    next_card: "Następna →",
    rate_prompt: "Kliknij gwiazdkę, by ocenić",
    terms: "Pojęcia",
    definitions: "Definicje",
    check: "Sprawdź",
    order_correct: "✅ Poprawna kolejność!",
    order_incorrect: "❌ Jeszcze nie, sortuj dalej.",
    move_up: "W górę",
    move_down: "W dół",
    listen: "🔊 Posłuchaj",
    days: "dni",
    empty_media: "Brak multimediów",
    download: "Pobierz",
    close: "Zamknij",
    completed: "🏆 Gratulacje! Ukończyłeś",
    option_a: "Opcja A",
    option_b: "Opcja B",
};

impl Labels {
    /// `pl*` selects Polish; anything else English
    pub fn for_language(language: &str) -> &'static Labels {
        if language.trim().to_ascii_lowercase().starts_with("pl") {
            &POLISH
        } else {
            &ENGLISH
        }
    }

    pub fn completion(&self, title: &str) -> String {
        format!("{} \"{}\"!", self.completed, title)
    }
}
