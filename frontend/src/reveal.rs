use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;

/// Elements that fade in the first time they scroll into view.
pub const REVEALED_CLASSES: &[&str] = &["card", "link-card", "program-card", "team-member", "benefit-item"];

const HIDDEN: &str = "reveal";
const SHOWN: &str = "revealed";

pub fn reveal_selector(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|class| format!(".{}", class))
        .collect::<Vec<_>>()
        .join(", ")
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_cards() -> Option<(IntersectionObserver, ObserverCallback)> {
    let document = web_sys::window().and_then(|w| w.document())?;

    let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            if let Err(e) = target.class_list().add_1(SHOWN) {
                warn!("could not reveal card: {:?}", e);
            }
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("scroll reveal unavailable: {:?}", e);
            return None;
        }
    };

    let cards = match document.query_selector_all(&reveal_selector(REVEALED_CLASSES)) {
        Ok(cards) => cards,
        Err(e) => {
            warn!("scroll reveal selector rejected: {:?}", e);
            return None;
        }
    };
    for i in 0..cards.length() {
        let Some(card) = cards.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        // Cards already shown on an earlier pass keep their state.
        if card.class_list().contains(SHOWN) {
            continue;
        }
        if card.class_list().add_1(HIDDEN).is_ok() {
            observer.observe(&card);
        }
    }

    Some((observer, callback))
}

/// Fades page cards in as they scroll into view. Re-scans on every route
/// change, since each page brings its own cards.
#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll() -> Html {
    let path = use_location().map(|l| l.path().to_string()).unwrap_or_default();

    use_effect_with_deps(
        move |_: &String| {
            let watch = observe_cards();
            move || {
                if let Some((observer, _callback)) = watch {
                    observer.disconnect();
                }
            }
        },
        path,
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_lists_every_class() {
        assert_eq!(reveal_selector(&["card", "team-member"]), ".card, .team-member");
        assert_eq!(reveal_selector(&[]), "");
    }

    #[test]
    fn test_revealed_classes_cover_page_cards() {
        let selector = reveal_selector(REVEALED_CLASSES);
        assert!(selector.starts_with(".card, "));
        assert!(selector.contains(".program-card"));
    }
}
