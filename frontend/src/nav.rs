use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::browser;
use crate::config;
use crate::theme::ThemeToggle;
use crate::Route;

/// Open/closed state of the mobile menu and its dropdowns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub open_dropdown: Option<usize>,
}

pub enum NavAction {
    ToggleMenu,
    /// A plain link was followed.
    LinkClicked,
    /// A dropdown's own toggle link was clicked.
    DropdownClicked { index: usize, narrow: bool },
    /// A click landed somewhere outside the navigation bar.
    OutsideClick,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NavAction::ToggleMenu => Rc::new(NavState {
                menu_open: !self.menu_open,
                open_dropdown: None,
            }),
            NavAction::LinkClicked => Rc::new(NavState::default()),
            NavAction::DropdownClicked { index, narrow } => {
                if !narrow {
                    // Wide layouts open dropdowns on hover.
                    return Rc::new(NavState::default());
                }
                let open_dropdown = if self.open_dropdown == Some(index) {
                    None
                } else {
                    Some(index)
                };
                Rc::new(NavState {
                    menu_open: self.menu_open,
                    open_dropdown,
                })
            }
            NavAction::OutsideClick => {
                if self.menu_open || self.open_dropdown.is_some() {
                    Rc::new(NavState::default())
                } else {
                    self
                }
            }
        }
    }
}

pub fn is_narrow(viewport_width: f64) -> bool {
    viewport_width <= config::MOBILE_BREAKPOINT_PX
}

struct NavGroup {
    label: &'static str,
    links: &'static [(Route, &'static str)],
}

const GROUPS: &[NavGroup] = &[
    NavGroup {
        label: "Wellness",
        links: &[
            (Route::Fitness, "Fitness"),
            (Route::Nutrition, "Nutrition"),
            (Route::MentalHealth, "Mental Health"),
            (Route::Sleep, "Sleep"),
            (Route::Addiction, "Recovery"),
        ],
    },
    NavGroup {
        label: "Community",
        links: &[
            (Route::Events, "Events"),
            (Route::GetInvolved, "Get Involved"),
        ],
    },
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let state = use_reducer(NavState::default);
    let nav_ref = use_node_ref();
    let (viewport_width, _) = use_window_size();
    let narrow = is_narrow(viewport_width);

    // Close everything when the user clicks elsewhere on the page.
    {
        let dispatcher = state.dispatcher();
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let listener = Closure::wrap(Box::new(move |e: web_sys::Event| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = match (nav_ref.get(), target) {
                        (Some(nav), Some(target)) => nav.contains(Some(&target)),
                        _ => true,
                    };
                    if !inside {
                        dispatcher.dispatch(NavAction::OutsideClick);
                    }
                }) as Box<dyn FnMut(web_sys::Event)>);

                if let Some(document) = &document {
                    if let Err(e) = document
                        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                    {
                        log::warn!("outside-click listener not installed: {:?}", e);
                    }
                } else {
                    log::warn!("no document, mobile menu will not close on outside clicks");
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        use_effect_with_deps(
            move |menu_open: &bool| {
                browser::lock_body_scroll(*menu_open);
                || browser::lock_body_scroll(false)
            },
            state.menu_open,
        );
    }

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            state.dispatch(NavAction::ToggleMenu);
        })
    };

    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(NavAction::LinkClicked);
        })
    };

    html! {
        <nav class="navbar" ref={nav_ref}>
            <div class="nav-container">
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"Campus Wellness Hub"}
                    </Link<Route>>
                </div>

                <ul class={classes!("nav-menu", state.menu_open.then(|| "active"))}>
                    { for GROUPS.iter().enumerate().map(|(index, group)| {
                        let open = state.open_dropdown == Some(index);
                        let on_toggle = {
                            let state = state.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                if narrow {
                                    e.stop_propagation();
                                }
                                state.dispatch(NavAction::DropdownClicked { index, narrow });
                            })
                        };
                        html! {
                            <li class={classes!("nav-item", "dropdown", open.then(|| "active"))}>
                                <a href="#" class="nav-link" onclick={on_toggle}>
                                    {group.label}{" "}<i class="fas fa-chevron-down"></i>
                                </a>
                                <ul class={classes!("dropdown-menu", open.then(|| "show"))}>
                                    { for group.links.iter().map(|(route, label)| html! {
                                        <li onclick={close_menu.clone()}>
                                            <Link<Route> to={route.clone()} classes="dropdown-link">
                                                {*label}
                                            </Link<Route>>
                                        </li>
                                    }) }
                                </ul>
                            </li>
                        }
                    }) }
                    <li class="nav-item" onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Faq} classes="nav-link">{"FAQ"}</Link<Route>>
                    </li>
                    <li class="nav-item" onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-link">{"Contact"}</Link<Route>>
                    </li>
                    <li class="nav-item" onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Login} classes="nav-link nav-login">{"Login"}</Link<Route>>
                    </li>
                </ul>

                <div class="nav-actions">
                    <ThemeToggle />
                    <button id="hamburger" class={classes!("hamburger", state.menu_open.then(|| "active"))} onclick={toggle_menu}>
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .navbar {
                    position: sticky;
                    top: 0;
                    z-index: 100;
                    background: var(--bg);
                    border-bottom: 1px solid var(--border);
                }
                .nav-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0.75rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-weight: 700;
                    font-size: 1.25rem;
                    color: var(--accent);
                    text-decoration: none;
                }
                .nav-menu {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link, .dropdown-link {
                    color: var(--text);
                    text-decoration: none;
                }
                .dropdown { position: relative; }
                .dropdown-menu {
                    display: none;
                    position: absolute;
                    list-style: none;
                    padding: 0.5rem 1rem;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 8px;
                    min-width: 160px;
                }
                .dropdown-menu li { padding: 0.35rem 0; }
                .dropdown:hover .dropdown-menu, .dropdown-menu.show { display: block; }
                .nav-actions { display: flex; align-items: center; gap: 0.75rem; }
                .theme-toggle {
                    background: none;
                    border: 1px solid var(--border);
                    border-radius: 50%;
                    width: 36px;
                    height: 36px;
                    color: var(--text);
                    cursor: pointer;
                }
                .hamburger {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .hamburger .bar {
                    display: block;
                    width: 24px;
                    height: 3px;
                    margin: 4px 0;
                    background: var(--text);
                    transition: transform 0.3s ease;
                }
                @media (max-width: 768px) {
                    .hamburger { display: block; }
                    .nav-menu {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1rem 1.5rem;
                        background: var(--bg);
                        border-bottom: 1px solid var(--border);
                    }
                    .nav-menu.active { display: flex; }
                    .dropdown:hover .dropdown-menu { display: none; }
                    .dropdown-menu.show { display: block; position: static; }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: NavState, action: NavAction) -> NavState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_toggle_menu_opens_and_closes() {
        let open = apply(NavState::default(), NavAction::ToggleMenu);
        assert!(open.menu_open);
        let closed = apply(open, NavAction::ToggleMenu);
        assert!(!closed.menu_open);
    }

    #[test]
    fn test_link_click_closes_menu() {
        let open = apply(NavState::default(), NavAction::ToggleMenu);
        assert_eq!(apply(open, NavAction::LinkClicked), NavState::default());
    }

    #[test]
    fn test_dropdown_opens_only_on_narrow_viewports() {
        let wide = apply(
            NavState::default(),
            NavAction::DropdownClicked { index: 0, narrow: false },
        );
        assert_eq!(wide.open_dropdown, None);

        let narrow = apply(
            NavState::default(),
            NavAction::DropdownClicked { index: 0, narrow: true },
        );
        assert_eq!(narrow.open_dropdown, Some(0));
    }

    #[test]
    fn test_opening_a_dropdown_closes_the_other() {
        let first = apply(
            NavState { menu_open: true, open_dropdown: None },
            NavAction::DropdownClicked { index: 0, narrow: true },
        );
        let second = apply(first, NavAction::DropdownClicked { index: 1, narrow: true });
        assert_eq!(second.open_dropdown, Some(1));
        assert!(second.menu_open);

        let toggled_off = apply(second, NavAction::DropdownClicked { index: 1, narrow: true });
        assert_eq!(toggled_off.open_dropdown, None);
    }

    #[test]
    fn test_outside_click_closes_open_menu() {
        let open = NavState { menu_open: true, open_dropdown: Some(1) };
        assert_eq!(apply(open, NavAction::OutsideClick), NavState::default());
    }

    #[test]
    fn test_breakpoint_is_inclusive() {
        assert!(is_narrow(768.0));
        assert!(is_narrow(320.0));
        assert!(!is_narrow(769.0));
    }
}
