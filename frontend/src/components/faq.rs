use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::components::common::SectionHeading;
use crate::components::icons::{Icon, IconKind};
use crate::content::{FaqEntry, PageSection, FAQ_ENTRIES};

/// Position of an entry in an [`Accordion`]. Only handed out by the
/// accordion itself, so it is always in range for the list it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryIndex(usize);

impl EntryIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

/// Single-expansion state over a list whose length is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    expanded: Option<EntryIndex>,
}

impl Accordion {
    /// The first entry starts expanded.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            expanded: (len > 0).then_some(EntryIndex(0)),
        }
    }

    pub fn entry(&self, index: usize) -> Option<EntryIndex> {
        (index < self.len).then_some(EntryIndex(index))
    }

    pub fn entries(&self) -> impl Iterator<Item = EntryIndex> {
        (0..self.len).map(EntryIndex)
    }

    pub fn expanded(&self) -> Option<EntryIndex> {
        self.expanded
    }

    pub fn is_expanded(&self, index: EntryIndex) -> bool {
        self.expanded == Some(index)
    }

    /// Collapses `index` if it is the expanded entry, otherwise expands it
    /// and collapses whatever was open.
    pub fn activate(&mut self, index: EntryIndex) {
        debug_assert!(index.0 < self.len);
        self.expanded = if self.is_expanded(index) { None } else { Some(index) };
    }
}

impl Reducible for Accordion {
    type Action = EntryIndex;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.activate(action);
        debug!("FAQ expanded entry now {:?}", next.expanded().map(EntryIndex::get));
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_activate: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_activate = props.on_activate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_activate.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <Icon kind={IconKind::ChevronDown} size={20} class={classes!("faq-chevron")} />
            </button>
            <div class="faq-answer">
                <div class="faq-answer-body">{&props.answer}</div>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_reducer_eq(|| Accordion::new(FAQ_ENTRIES.len()));

    let items = FAQ_ENTRIES
        .iter()
        .zip(accordion.entries())
        .map(|(FaqEntry { question, answer }, index)| {
            let on_activate = {
                let accordion = accordion.clone();
                Callback::from(move |_: ()| accordion.dispatch(index))
            };
            html! {
                <FaqItem
                    key={index.get()}
                    question={*question}
                    answer={*answer}
                    open={accordion.is_expanded(index)}
                    {on_activate}
                />
            }
        })
        .collect::<Html>();

    html! {
        <section id={PageSection::Faq.anchor()} class="faq-section">
            <div class="faq-container">
                <SectionHeading title="Perguntas Frequentes" />
                <div class="faq-list">
                    { items }
                </div>
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 6rem 1.5rem;
                }

                .faq-container {
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 0.75rem;
                    overflow: hidden;
                    transition: border-color 0.3s;
                }

                .faq-item:hover {
                    border-color: var(--border-strong);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    text-align: left;
                    font-weight: 700;
                    font-size: 1rem;
                    color: var(--text-main);
                    cursor: pointer;
                }

                .faq-chevron {
                    color: var(--text-muted);
                    transition: transform 0.3s;
                    flex-shrink: 0;
                }

                .faq-item.open .faq-chevron {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease-in-out, opacity 0.3s ease-in-out;
                }

                .faq-item.open .faq-answer {
                    max-height: 10rem;
                    opacity: 1;
                }

                .faq-answer-body {
                    padding: 0 1.5rem 1.5rem;
                    color: var(--text-muted);
                    line-height: 1.6;
                    border-top: 1px solid var(--border-soft);
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded_count(accordion: &Accordion) -> usize {
        accordion.entries().filter(|&i| accordion.is_expanded(i)).count()
    }

    #[test]
    fn first_entry_starts_expanded() {
        let accordion = Accordion::new(5);
        assert_eq!(accordion.expanded().map(EntryIndex::get), Some(0));
        assert_eq!(expanded_count(&accordion), 1);
    }

    #[test]
    fn empty_list_has_nothing_expanded() {
        let accordion = Accordion::new(0);
        assert_eq!(accordion.expanded(), None);
        assert_eq!(accordion.entry(0), None);
    }

    #[test]
    fn activating_twice_collapses() {
        let mut accordion = Accordion::new(5);
        let k = accordion.entry(3).unwrap();
        accordion.activate(k);
        accordion.activate(k);
        assert_eq!(accordion.expanded(), None);
    }

    #[test]
    fn activating_expanded_first_entry_collapses_it() {
        let mut accordion = Accordion::new(5);
        accordion.activate(accordion.entry(0).unwrap());
        assert_eq!(expanded_count(&accordion), 0);
    }

    #[test]
    fn activating_another_entry_moves_expansion() {
        let mut accordion = Accordion::new(5);
        let k = accordion.entry(1).unwrap();
        let j = accordion.entry(4).unwrap();
        accordion.activate(k);
        accordion.activate(j);
        assert_eq!(accordion.expanded(), Some(j));
        assert!(!accordion.is_expanded(k));
    }

    #[test]
    fn at_most_one_entry_expanded_over_any_sequence() {
        let mut accordion = Accordion::new(4);
        let sequence = [2, 2, 0, 1, 3, 3, 3, 0, 0, 1, 2];
        for i in sequence {
            accordion.activate(accordion.entry(i).unwrap());
            assert!(expanded_count(&accordion) <= 1);
        }
    }

    #[test]
    fn out_of_range_entry_is_not_handed_out() {
        let accordion = Accordion::new(FAQ_ENTRIES.len());
        assert!(accordion.entry(FAQ_ENTRIES.len()).is_none());
        assert_eq!(accordion.entries().count(), FAQ_ENTRIES.len());
    }

    #[test]
    fn reducer_matches_activate() {
        let state = Rc::new(Accordion::new(3));
        let second = state.entry(1).unwrap();
        let state = state.reduce(second);
        assert_eq!(state.expanded(), Some(second));
    }
}
