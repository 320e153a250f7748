use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Node};
use yew::prelude::*;

use crate::browser;

/// Something the user did while a modal was open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalInput<'a> {
    Key(&'a str),
    /// A click; `on_backdrop` is false when it landed inside the content.
    Click { on_backdrop: bool },
    CloseButton,
}

pub fn should_close(input: ModalInput) -> bool {
    match input {
        ModalInput::Key(key) => key == "Escape",
        ModalInput::Click { on_backdrop } => on_backdrop,
        ModalInput::CloseButton => true,
    }
}

/// Events are delegated from the app root, so the backdrop is identified by
/// node rather than by `current_target`.
fn is_backdrop(target: Option<web_sys::EventTarget>, backdrop: Option<Node>) -> bool {
    match (target, backdrop) {
        (Some(target), Some(backdrop)) => target
            .dyn_ref::<Node>()
            .map(|node| backdrop.is_same_node(Some(node)))
            .unwrap_or(false),
        _ => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: AttrValue,
    pub title: AttrValue,
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay dialog. Closes on Escape, on the close button and on clicks on
/// the backdrop itself. Page scrolling is locked while it is open.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let open = *open;
                browser::lock_body_scroll(open);
                let document = web_sys::window().and_then(|w| w.document());
                let listener = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if should_close(ModalInput::Key(&e.key())) {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                if open {
                    if let Some(document) = &document {
                        if let Err(e) = document
                            .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
                        {
                            log::warn!("escape listener not installed: {:?}", e);
                        }
                    }
                }

                move || {
                    if open {
                        browser::lock_body_scroll(false);
                        if let Some(document) = document {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                listener.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            props.open,
        );
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = is_backdrop(e.target(), backdrop_ref.get());
            if should_close(ModalInput::Click { on_backdrop }) {
                on_close.emit(());
            }
        })
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if should_close(ModalInput::CloseButton) {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            id={props.id.clone()}
            class="modal"
            ref={backdrop_ref}
            style={if props.open { "display: flex;" } else { "display: none;" }}
            onclick={on_backdrop}
        >
            <div class="modal-content">
                <button class="modal-close" aria-label="Close" onclick={on_close_button}>
                    <i class="fas fa-times"></i>
                </button>
                <h2>{props.title.clone()}</h2>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .modal {
                    position: fixed;
                    inset: 0;
                    z-index: 200;
                    background: rgba(0, 0, 0, 0.5);
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .modal-content {
                    position: relative;
                    background: var(--bg);
                    color: var(--text);
                    border-radius: 12px;
                    padding: 2rem;
                    width: 100%;
                    max-width: 520px;
                    max-height: 90vh;
                    overflow-y: auto;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.2rem;
                    cursor: pointer;
                    color: var(--muted);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_closes_other_keys_do_not() {
        assert!(should_close(ModalInput::Key("Escape")));
        assert!(!should_close(ModalInput::Key("Enter")));
        assert!(!should_close(ModalInput::Key("Esc ")));
    }

    #[test]
    fn test_backdrop_click_closes_content_click_does_not() {
        assert!(should_close(ModalInput::Click { on_backdrop: true }));
        assert!(!should_close(ModalInput::Click { on_backdrop: false }));
    }

    #[test]
    fn test_close_button_always_closes() {
        assert!(should_close(ModalInput::CloseButton));
    }

    #[test]
    fn test_missing_target_or_node_is_not_backdrop() {
        assert!(!is_backdrop(None, None));
    }
}
