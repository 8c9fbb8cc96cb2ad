//! The widget scripts bundled into an artifact, run in an embedded JavaScript
//! engine over a small DOM (`support/dom.js`) and checked against the
//! reference state machines in `webook-runtime`.

use boa_engine::{Context, Source};
use chrono::Utc;
use serde_json::Value;
use webook_core::props::{
    to_props, ChecklistItem, ChecklistProps, CountdownProps, MatchPair, MatchingProps, QuizFeedback,
    QuizOption, QuizProps, SortItem, SortableProps,
};
use webook_core::{create_default, Block, Chapter, Document};
use webook_render::{compile, CompileOptions};
use webook_runtime::{
    days_remaining, distribution_matrix, ChecklistState, FlashcardDeck, Mark, MatchingState,
    NavState, PollState, QuizState, RatingState, SortableState, Step, ToggleState,
};

struct Page {
    context: Context,
}

fn js(s: &str) -> String {
    serde_json::to_string(s).unwrap()
}

impl Page {
    fn open(html: &str) -> Self {
        Self::open_with(html, "")
    }

    /// Mount the artifact body, run `before_boot`, then the bundled script
    fn open_with(html: &str, before_boot: &str) -> Self {
        let body_from = html.find("<body>").expect("body") + "<body>".len();
        let script_at = html.rfind("<script>").expect("script");
        let script_end = html.rfind("</script>").expect("script end");

        let mut page = Page {
            context: Context::default(),
        };
        page.run(include_str!("support/dom.js"));
        page.run(&format!("__mount({});", js(&html[body_from..script_at])));
        page.run(before_boot);
        page.run(&html[script_at + "<script>".len()..script_end]);
        page
    }

    fn run(&mut self, code: &str) {
        if let Err(err) = self.context.eval(Source::from_bytes(code)) {
            panic!("script failed: {err:?}");
        }
    }

    fn get(&mut self, expr: &str) -> Value {
        let code = format!("JSON.stringify(({expr}) ?? null)");
        let value = self
            .context
            .eval(Source::from_bytes(&code))
            .unwrap_or_else(|err| panic!("{expr}: {err:?}"));
        let json = value
            .to_string(&mut self.context)
            .expect("stringified")
            .to_std_string_escaped();
        serde_json::from_str(&json).expect("json result")
    }

    fn click(&mut self, sel: &str, index: usize) {
        self.run(&format!("__click({}, {index});", js(sel)));
    }

    fn click_in(&mut self, sel: &str, index: usize, inner: &str) {
        self.run(&format!("__clickIn({}, {index}, {});", js(sel), js(inner)));
    }

    fn text(&mut self, sel: &str) -> String {
        match self.get(&format!("__text({})", js(sel))) {
            Value::String(s) => s,
            other => panic!("{sel}: {other}"),
        }
    }

    fn classes(&mut self, sel: &str) -> Vec<Vec<String>> {
        serde_json::from_value(self.get(&format!("__classes({})", js(sel)))).unwrap()
    }

    fn has_class(&mut self, sel: &str, class: &str) -> Vec<bool> {
        self.classes(sel)
            .iter()
            .map(|names| names.iter().any(|n| n == class))
            .collect()
    }

    fn attrs(&mut self, sel: &str, name: &str) -> Vec<Option<String>> {
        serde_json::from_value(self.get(&format!("__attrs({}, {})", js(sel), js(name)))).unwrap()
    }

    fn hidden(&mut self, sel: &str) -> Vec<bool> {
        serde_json::from_value(self.get(&format!("__hidden({})", js(sel)))).unwrap()
    }

    fn numbers(&mut self, sel: &str, name: &str) -> Vec<i64> {
        self.attrs(sel, name)
            .into_iter()
            .map(|v| v.expect("attribute").parse().expect("number"))
            .collect()
    }
}

fn document(chapters: Vec<Vec<Block>>) -> Document {
    let mut doc = Document::new("Runtime book");
    for (i, blocks) in chapters.into_iter().enumerate() {
        let mut chapter = Chapter::new(format!("Part {}", i + 1));
        chapter.blocks = blocks;
        doc.chapters.push(chapter);
    }
    doc
}

fn block(variant: &str, content: &str) -> Block {
    let mut block = create_default(variant).unwrap();
    block.content = content.to_string();
    block
}

fn artifact(blocks: Vec<Block>) -> String {
    compile(&document(vec![blocks]), &CompileOptions::default()).unwrap()
}

fn quiz(correct: &[bool]) -> Block {
    let mut quiz = block("quiz", "Which one?");
    quiz.props = to_props(&QuizProps {
        options: correct
            .iter()
            .enumerate()
            .map(|(i, ok)| QuizOption {
                id: format!("o{i}"),
                text: format!("Option {i}"),
                is_correct: *ok,
                explanation: format!("Because {i}."),
            })
            .collect(),
        feedback: QuizFeedback {
            correct: "Yes".into(),
            incorrect: "No".into(),
        },
        points: 1,
    });
    quiz
}

#[test]
fn test_quiz_marks_follow_the_single_shot_machine() {
    let flags = [false, true, false];
    for pick in 0..flags.len() {
        let mut page = Page::open(&artifact(vec![quiz(&flags)]));
        let mut state = QuizState::new(flags.to_vec());

        page.click(".b-quiz-opt", pick);
        assert!(state.select(pick));
        let other = (pick + 1) % flags.len();
        page.click(".b-quiz-opt", other);
        assert!(!state.select(other));

        let correct = page.has_class(".b-quiz-opt", "correct");
        let wrong = page.has_class(".b-quiz-opt", "wrong");
        for (i, mark) in state.marks().into_iter().enumerate() {
            assert_eq!(correct[i], mark == Mark::Correct, "pick {pick}, option {i}");
            assert_eq!(wrong[i], mark == Mark::Wrong, "pick {pick}, option {i}");
        }
        assert_eq!(correct.iter().filter(|c| **c).count(), 1);

        let feedback = if state.answered_correctly() == Some(true) { "Yes" } else { "No" };
        assert_eq!(page.text(".b-quiz-feedback"), feedback);
        assert_eq!(page.has_class(".b-quiz-opt", "disabled"), vec![true; flags.len()]);
    }
}

#[test]
fn test_scenario_pick_wrong_answer_in_artifact() {
    let mut page = Page::open(&artifact(vec![quiz(&[false, true])]));
    page.click(".b-quiz-opt", 0);

    assert_eq!(page.has_class(".b-quiz-opt", "correct"), vec![false, true]);
    assert_eq!(page.has_class(".b-quiz-opt", "wrong"), vec![true, false]);
    assert_eq!(page.text(".b-quiz-feedback"), "No");
    assert!(page.has_class(".b-quiz-feedback", "bad")[0]);
    assert_eq!(page.hidden(".b-quiz-explain"), vec![false, true]);
}

#[test]
fn test_scenario_checklist_toggle_twice() {
    let mut list = block("checklist", "");
    list.props = to_props(&ChecklistProps {
        items: (0..3)
            .map(|i| ChecklistItem {
                id: format!("i{i}"),
                text: format!("Item {i}"),
                done: false,
            })
            .collect(),
    });
    let mut page = Page::open(&artifact(vec![list]));
    let mut state = ChecklistState::new(vec![false; 3]);
    assert_eq!(page.text(".b-progress-val"), "0/3");

    page.click(".b-check-item", 1);
    state.toggle(1);
    assert_eq!(page.text(".b-progress-val"), "1/3");
    assert_eq!(page.text(".b-progress-val"), state.label());
    assert_eq!(page.has_class(".b-check-item", "done"), vec![false, true, false]);
    assert_eq!(
        page.attrs(".b-check-item", "aria-checked"),
        vec![Some("false".into()), Some("true".into()), Some("false".into())]
    );

    page.click(".b-check-item", 1);
    state.toggle(1);
    assert_eq!(page.text(".b-progress-val"), "0/3");
    assert_eq!(page.text(".b-progress-val"), state.label());
}

#[test]
fn test_matching_is_keyed_by_original_pair_under_shuffle() {
    let mut matching = block("matching", "Match them");
    matching.props = to_props(&MatchingProps {
        pairs: (0..4)
            .map(|i| MatchPair {
                id: format!("p{i}"),
                left: format!("L{i}"),
                right: format!("R{i}"),
            })
            .collect(),
    });
    let mut page = Page::open(&artifact(vec![matching]));
    let right_pairs: Vec<usize> = page
        .numbers(".right-item", "data-pair")
        .into_iter()
        .map(|p| p as usize)
        .collect();
    assert_ne!(right_pairs, vec![0, 1, 2, 3]);
    let position = |pair: usize| right_pairs.iter().position(|p| *p == pair).unwrap();

    let mut state = MatchingState::new(4);
    let check = |page: &mut Page, state: &MatchingState| {
        let left_matched = page.has_class(".left-item", "matched");
        let right_matched = page.has_class(".right-item", "matched");
        for pair in 0..4 {
            assert_eq!(left_matched[pair], state.is_matched(pair), "left {pair}");
            assert_eq!(right_matched[position(pair)], state.is_matched(pair), "right {pair}");
        }
        assert!(!page.has_class(".left-item", "selected").contains(&true));
        assert!(!page.has_class(".right-item", "selected").contains(&true));
    };

    // Same display slot as the left item, different pair: a mismatch
    let slot_zero_pair = right_pairs[0];
    let left = if slot_zero_pair == 0 { 1 } else { 0 };
    page.click(".left-item", left);
    page.click(".right-item", 0);
    state.select_left(left);
    state.select_right(slot_zero_pair);
    check(&mut page, &state);

    for pair in [2, 0, 3, 1] {
        page.click(".left-item", pair);
        page.click(".right-item", position(pair));
        state.select_left(pair);
        state.select_right(pair);
        check(&mut page, &state);
    }
    assert!(state.is_complete());
    assert!(page.has_class("[data-widget=\"matching\"]", "complete")[0]);
}

#[test]
fn test_navigation_progress_matches_seen_set() {
    let chapters = (0..4).map(|i| vec![block("paragraph", &format!("Body {i}"))]).collect();
    let html = compile(&document(chapters), &CompileOptions::default()).unwrap();
    let mut page = Page::open(&html);
    let mut nav = NavState::new(4);

    enum Action {
        Next,
        Prev,
        Goto(usize),
    }
    let script = [
        Action::Prev,
        Action::Next,
        Action::Next,
        Action::Prev,
        Action::Goto(0),
        Action::Goto(2),
        Action::Goto(3),
        Action::Prev,
        Action::Goto(1),
    ];
    for action in script {
        match action {
            Action::Next => {
                page.click("#btn-next", 0);
                nav.next();
            }
            Action::Prev => {
                page.click("#btn-prev", 0);
                nav.prev();
            }
            Action::Goto(i) => {
                page.click(".toc-item", i);
                nav.jump_to(i);
            }
        }
        let visible: Vec<bool> = page.hidden("section.chapter").iter().map(|h| !h).collect();
        let expected: Vec<bool> = (0..4).map(|i| i == nav.current()).collect();
        assert_eq!(visible, expected);
        assert_eq!(page.text("#ch-num"), nav.counter());
        assert_eq!(page.text("#pct"), format!("{}%", nav.progress()));
        assert_eq!(
            page.has_class(".toc-item", "active"),
            expected,
            "toc follows the active chapter"
        );
    }
    assert_eq!(nav.seen_count(), 4);
    assert_eq!(page.text("#pct"), "100%");
}

#[test]
fn test_next_on_last_chapter_completes_without_moving() {
    let chapters = (0..2).map(|i| vec![block("paragraph", &format!("Body {i}"))]).collect();
    let html = compile(&document(chapters), &CompileOptions::default()).unwrap();

    let mut page = Page::open(&html);
    let mut nav = NavState::new(2);
    page.click("#btn-next", 0);
    nav.next();
    assert_eq!(page.hidden("#complete"), vec![true]);
    assert_eq!(page.text("#btn-next"), "🏆 Finish");

    page.click("#btn-next", 0);
    assert_eq!(nav.next(), Step::Completed);
    assert_eq!(page.hidden("#complete"), vec![false]);
    assert_eq!(page.text("#ch-num"), nav.counter());
    page.click("[data-dismiss]", 0);
    assert_eq!(page.hidden("#complete"), vec![true]);

    let mut hooked = Page::open_with(
        &html,
        "window.webookComplete = function (title) { window.completedWith = title; };",
    );
    hooked.click("#btn-next", 0);
    hooked.click("#btn-next", 0);
    assert_eq!(hooked.get("window.completedWith"), Value::from("Runtime book"));
    assert_eq!(hooked.hidden("#complete"), vec![true]);
}

#[test]
fn test_poll_shows_the_precomputed_row() {
    let mut poll = block("poll", "Favourite?");
    poll.id = "poll-1".into();
    let options = CompileOptions {
        seed: 11,
        ..Default::default()
    };
    let html = compile(&document(vec![vec![poll]]), &options).unwrap();
    let mut page = Page::open(&html);
    let mut state = PollState::new(distribution_matrix(11, "poll-1", 3));

    for pick in [1, 2] {
        page.click(".b-poll-opt", pick);
        state.vote(pick);
        let shown: Vec<String> = (0..3)
            .map(|i| page.get(&format!("document.querySelectorAll('.b-poll-pct')[{i}].textContent")))
            .map(|v| v.as_str().unwrap_or_default().to_string())
            .collect();
        let expected: Vec<String> = state.shown().iter().map(|p| format!("{p}%")).collect();
        assert_eq!(shown, expected);
        assert_eq!(
            page.has_class(".b-poll-opt", "voted"),
            (0..3).map(|i| Some(i) == state.voted()).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_sortable_arrows_then_check() {
    let mut sortable = block("sortable", "Put in order");
    sortable.props = to_props(&SortableProps {
        items: (0..5)
            .map(|i| SortItem {
                id: format!("s{i}"),
                text: format!("Step {i}"),
                order: i,
            })
            .collect(),
    });
    let mut page = Page::open(&artifact(vec![sortable]));
    let mut state = SortableState::new(page.numbers(".b-sort-item", "data-order"));

    page.click(".b-sort-check-btn", 0);
    let first = state.check();
    assert!(page.has_class(".b-sort-result", if first { "ok" } else { "bad" })[0]);
    assert_eq!(page.hidden(".b-sort-result"), vec![false]);

    while let Some(i) = state.orders().windows(2).position(|w| w[0] > w[1]) {
        page.click_in(".b-sort-item", i, "[data-move=\"1\"]");
        state.nudge(i, 1);
        assert_eq!(page.numbers(".b-sort-item", "data-order"), state.orders());
        assert_eq!(page.hidden(".b-sort-result"), vec![true]);
    }
    page.click_in(".b-sort-item", 0, "[data-move=\"-1\"]");
    assert_eq!(page.numbers(".b-sort-item", "data-order"), vec![0, 1, 2, 3, 4]);

    page.click(".b-sort-check-btn", 0);
    assert!(state.check());
    assert!(page.has_class(".b-sort-result", "ok")[0]);
    assert_eq!(page.text(".b-sort-result"), "✅ Correct order!");
}

#[test]
fn test_flashcards_rating_and_toggle() {
    let mut page = Page::open(&artifact(vec![
        block("flashcards", ""),
        block("rating", "Rate"),
        block("toggle", "More"),
    ]));

    let mut deck = FlashcardDeck::new(2);
    page.click(".b-flashcard", 0);
    deck.flip();
    assert_eq!(page.has_class(".b-flashcard", "flipped"), vec![deck.is_flipped()]);
    for step in [1, 1, -1] {
        page.click(&format!("[data-step=\"{step}\"]"), 0);
        deck.step(step);
        assert_eq!(page.text(".b-fc-counter"), deck.counter());
        assert_eq!(page.has_class(".b-flashcard", "flipped"), vec![false]);
        let fronts: Vec<bool> = page.hidden(".fc-front").iter().map(|h| !h).collect();
        assert_eq!(fronts, (0..2).map(|i| i == deck.current()).collect::<Vec<_>>());
    }

    let mut rating = RatingState::new(5, 0);
    page.click(".b-rating-star", 2);
    rating.set(3);
    assert_eq!(Some(page.text(".b-rating-result")), rating.label());
    assert_eq!(page.has_class(".b-rating-star", "active"), rating.lit());

    let mut toggle = ToggleState::default();
    for _ in 0..3 {
        page.click(".b-toggle-header", 0);
        toggle.toggle();
        assert_eq!(page.has_class("[data-widget=\"toggle\"]", "open"), vec![toggle.is_open()]);
    }
}

#[test]
fn test_countdown_is_computed_at_load() {
    let countdown = |date: &str| {
        let mut block = block("countdown", "Launch");
        block.props = to_props(&CountdownProps {
            target_date: date.to_string(),
            label: String::new(),
        });
        block
    };

    let before = Utc::now();
    let mut page = Page::open(&artifact(vec![
        countdown("2000-01-01"),
        countdown("2999-12-31"),
        countdown("someday"),
    ]));
    let after = Utc::now();
    let shown: Vec<String> = (0..3)
        .map(|i| page.get(&format!("document.querySelectorAll('.b-cd-num')[{i}].textContent")))
        .map(|v| v.as_str().unwrap_or_default().to_string())
        .collect();

    assert_eq!(shown[0], "0");
    let target = CountdownProps {
        target_date: "2999-12-31".into(),
        label: String::new(),
    }
    .target()
    .unwrap();
    let days: i64 = shown[1].parse().unwrap();
    assert!(days == days_remaining(target, before) || days == days_remaining(target, after));
    assert_eq!(shown[2], "?");
}

#[test]
fn test_broken_widget_is_inert_and_others_still_work() {
    let mut poll = block("poll", "Favourite?");
    poll.id = "poll-1".into();
    let html = artifact(vec![poll, quiz(&[true, false])]);
    let mut page = Page::open_with(
        &html,
        "document.querySelector('[data-widget=\"poll\"]').removeAttribute('data-distribution');",
    );

    assert_eq!(page.attrs("[data-widget=\"poll\"]", "data-inert"), vec![Some(String::new())]);
    page.click(".b-poll-opt", 0);
    assert!(!page.has_class(".b-poll-opt", "voted").contains(&true));

    page.click(".b-quiz-opt", 0);
    assert_eq!(page.text(".b-quiz-feedback"), "Yes");
    assert_eq!(page.attrs("[data-widget=\"quiz\"]", "data-inert"), vec![None]);
}
