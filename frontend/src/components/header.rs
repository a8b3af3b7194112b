use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::common::{Button, ButtonVariant, Logo};
use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::content::NavTarget;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    TogglePressed,
    LinkSelected(NavTarget),
    BreakpointChanged,
}

impl MenuState {
    pub fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Closed, MenuEvent::TogglePressed) => MenuState::Open,
            (MenuState::Open, MenuEvent::TogglePressed) => MenuState::Closed,
            (_, MenuEvent::LinkSelected(_)) | (_, MenuEvent::BreakpointChanged) => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

impl Reducible for MenuState {
    type Action = MenuEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        debug!("Mobile menu {:?} -> {:?} on {:?}", *self, next, action);
        Rc::new(next)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Mobile,
    Desktop,
}

impl Layout {
    pub fn from_width(width: f64) -> Self {
        if width >= config::DESKTOP_BREAKPOINT_PX {
            Layout::Desktop
        } else {
            Layout::Mobile
        }
    }

    fn current() -> Option<Self> {
        web_sys::window()?
            .inner_width()
            .ok()?
            .as_f64()
            .map(Layout::from_width)
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { theme, on_toggle_theme } = props;
    let menu = use_reducer_eq(MenuState::default);

    // Crossing the breakpoint closes the mobile menu
    {
        let menu = menu.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let layout = Rc::new(Cell::new(Layout::current()));

                let resize_callback = Closure::wrap(Box::new(move || {
                    let now = Layout::current();
                    if now != layout.get() {
                        layout.set(now);
                        menu.dispatch(MenuEvent::BreakpointChanged);
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuEvent::TogglePressed);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    // The anchor's default jump is left to the browser
    let nav_links = |class: &'static str| -> Html {
        NavTarget::ALL
            .iter()
            .map(|&target| {
                let menu = menu.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    menu.dispatch(MenuEvent::LinkSelected(target));
                });
                html! {
                    <a href={target.href()} class={class} {onclick}>{target.label()}</a>
                }
            })
            .collect()
    };

    let theme_icon = match theme {
        Theme::Dark => IconKind::Sun,
        Theme::Light => IconKind::Moon,
    };

    html! {
        <header class="site-header">
            <div class="header-content">
                <Logo />

                <nav class="desktop-nav">
                    { nav_links("nav-link") }
                </nav>

                <div class="desktop-actions">
                    <button
                        class="theme-switch"
                        onclick={toggle_theme.clone()}
                        aria-label="Toggle theme"
                    >
                        <Icon kind={theme_icon} size={20} />
                    </button>
                    <Button variant={ButtonVariant::Ghost}>{"Login"}</Button>
                    <Button class={classes!("btn-compact")}>{"Experimentar Agora"}</Button>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <Icon kind={if menu.is_open() { IconKind::Close } else { IconKind::Menu }} />
                </button>
            </div>

            if menu.is_open() {
                <div class="mobile-nav">
                    { nav_links("mobile-nav-link") }
                    <div class="mobile-actions">
                        <button class="theme-switch theme-switch-wide" onclick={toggle_theme}>
                            <Icon kind={theme_icon} size={20} />
                            {theme.switch_label()}
                        </button>
                        <Button variant={ButtonVariant::Outline} class={classes!("btn-block")}>{"Login"}</Button>
                        <Button class={classes!("btn-block")}>{"Experimentar Agora"}</Button>
                    </div>
                </div>
            }

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: color-mix(in srgb, var(--background) 80%, transparent);
                    backdrop-filter: blur(24px);
                    border-bottom: 1px solid var(--border-soft);
                }

                .header-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .desktop-nav, .desktop-actions {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--text-muted);
                    text-decoration: none;
                }

                .nav-link:hover {
                    color: var(--text-main);
                }

                .theme-switch {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                    color: var(--text-muted);
                    background: transparent;
                    border: none;
                    cursor: pointer;
                }

                .theme-switch:hover {
                    color: var(--text-main);
                    background: var(--surface);
                }

                .theme-switch-wide {
                    width: 100%;
                    padding: 0.75rem;
                    border: 1px solid var(--border-soft);
                }

                .burger-menu {
                    background: none;
                    border: none;
                    color: var(--text-main);
                    padding: 0.5rem;
                    cursor: pointer;
                }

                .mobile-nav {
                    position: absolute;
                    top: 4rem;
                    left: 0;
                    right: 0;
                    height: 100vh;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    background: color-mix(in srgb, var(--background) 95%, transparent);
                    backdrop-filter: blur(24px);
                    animation: fade-in 0.3s ease-out;
                }

                .mobile-nav-link {
                    color: var(--text-main);
                    font-size: 1.125rem;
                    font-weight: 500;
                    padding: 0.75rem 0;
                    border-bottom: 1px solid var(--border-soft);
                    text-decoration: none;
                }

                .mobile-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }

                @media (min-width: 768px) {
                    .desktop-nav, .desktop-actions {
                        display: flex;
                    }

                    .desktop-actions {
                        gap: 1rem;
                    }

                    .burger-menu, .mobile-nav {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn toggle_twice_returns_to_closed() {
        let state = MenuState::Closed
            .next(MenuEvent::TogglePressed)
            .next(MenuEvent::TogglePressed);
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn toggle_opens_from_closed() {
        assert!(MenuState::Closed.next(MenuEvent::TogglePressed).is_open());
    }

    #[test]
    fn selecting_any_link_closes_open_menu() {
        for target in NavTarget::ALL {
            assert_eq!(
                MenuState::Open.next(MenuEvent::LinkSelected(target)),
                MenuState::Closed
            );
        }
    }

    #[test]
    fn selecting_link_keeps_closed_menu_closed() {
        assert_eq!(
            MenuState::Closed.next(MenuEvent::LinkSelected(NavTarget::Faq)),
            MenuState::Closed
        );
    }

    #[test]
    fn breakpoint_change_closes_menu() {
        assert_eq!(MenuState::Open.next(MenuEvent::BreakpointChanged), MenuState::Closed);
        assert_eq!(MenuState::Closed.next(MenuEvent::BreakpointChanged), MenuState::Closed);
    }

    #[test]
    fn reducer_applies_transition() {
        let state = Rc::new(MenuState::Closed).reduce(MenuEvent::TogglePressed);
        assert_eq!(*state, MenuState::Open);
    }

    #[test]
    fn layout_switches_at_breakpoint() {
        assert_eq!(Layout::from_width(767.0), Layout::Mobile);
        assert_eq!(Layout::from_width(768.0), Layout::Desktop);
        assert_eq!(Layout::from_width(1440.0), Layout::Desktop);
    }
}
