use log::{debug, warn};
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

use crate::config;
use crate::storage::{self, KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The toggle shows the theme you would switch *to*.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

/// Saved preference first, then the system color scheme.
pub fn resolve_initial(store: &dyn KeyValueStore, prefers_dark: bool) -> Theme {
    let saved = match store.get(config::THEME_KEY) {
        Ok(saved) => saved,
        Err(e) => {
            warn!("{}", e);
            None
        }
    };
    match saved.as_deref().and_then(Theme::parse) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

pub fn toggle_and_persist(store: &dyn KeyValueStore, current: Theme) -> Result<Theme, StorageError> {
    let next = current.toggled();
    store.set(config::THEME_KEY, next.as_str())?;
    Ok(next)
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn apply_theme(theme: Theme) {
    match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        Some(root) => {
            if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
                warn!("could not set data-theme: {:?}", e);
            }
        }
        None => warn!("no document root, theme not applied"),
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(|| {
        let store = storage::open_store();
        resolve_initial(store.as_ref(), system_prefers_dark())
    });

    {
        use_effect_with_deps(
            move |theme: &Theme| {
                apply_theme(*theme);
                || ()
            },
            *theme,
        );
    }

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let store = storage::open_store();
            match toggle_and_persist(store.as_ref(), *theme) {
                Ok(next) => {
                    debug!("Theme switched to {}", next.as_str());
                    theme.set(next);
                }
                Err(e) => {
                    // Still switch for this page view.
                    warn!("{}", e);
                    theme.set(theme.toggled());
                }
            }
        })
    };

    html! {
        <button id="themeToggle" class="theme-toggle" {onclick} title="Toggle theme">
            <i class={theme.icon_class()}></i>
        </button>
    }
}

/// Color variables for both themes, switched by the `data-theme` attribute.
#[function_component(ThemeStyles)]
pub fn theme_styles() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --bg: #ffffff;
                --surface: #f8f9fa;
                --text: #2c3e50;
                --muted: #6c757d;
                --border: #e8e8e8;
                --accent: #457B9D;
                --accent-soft: rgba(168, 218, 220, 0.2);
                --success: #27AE60;
                --error: #e74c3c;
            }
            html[data-theme=dark] {
                --bg: #1a1a1a;
                --surface: #242424;
                --text: #ecf0f1;
                --muted: #a0a0a0;
                --border: #3a3a3a;
                --accent: #7EB2FF;
                --accent-soft: rgba(126, 178, 255, 0.15);
                --success: #2ecc71;
                --error: #ff6b6b;
            }
            body {
                margin: 0;
                background: var(--bg);
                color: var(--text);
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                transition: background-color 0.3s ease, color 0.3s ease;
            }
            .container { max-width: 1100px; margin: 0 auto; padding: 0 1.5rem; }
            .section { padding: 3rem 0; }
            .section h2 { margin-top: 0; }
            .page-hero {
                padding: 4rem 1.5rem 3rem;
                text-align: center;
                background: var(--accent-soft);
            }
            .page-hero h1 { margin: 0 0 0.75rem; font-size: 2.4rem; }
            .page-hero p { margin: 0 auto; max-width: 640px; color: var(--muted); }
            .card-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                gap: 1.25rem;
            }
            .card {
                background: var(--surface);
                border: 1px solid var(--border);
                border-radius: 12px;
                padding: 1.5rem;
            }
            .card h3 { margin-top: 0; }
            .reveal {
                opacity: 0;
                transform: translateY(20px);
                transition: opacity 0.6s ease, transform 0.6s ease;
            }
            .reveal.revealed { opacity: 1; transform: translateY(0); }
            .btn {
                display: inline-block;
                padding: 0.65rem 1.4rem;
                border-radius: 8px;
                border: 1px solid transparent;
                font-size: 1rem;
                cursor: pointer;
                text-decoration: none;
            }
            .btn-primary { background: var(--accent); color: #fff; }
            .btn-secondary { background: transparent; border-color: var(--accent); color: var(--accent); }
            .btn:disabled { opacity: 0.5; cursor: default; }
            .form-group { display: flex; flex-direction: column; gap: 0.35rem; margin-bottom: 1rem; }
            .form-group input, .form-group select, .form-group textarea {
                padding: 0.6rem 0.75rem;
                border: 1px solid var(--border);
                border-radius: 6px;
                background: var(--bg);
                color: var(--text);
                font: inherit;
            }
            .form-group.has-error input, .form-group.has-error select, .form-group.has-error textarea {
                border-color: var(--error);
            }
            .error-message { color: var(--error); font-size: 0.85rem; }
            .required { color: var(--error); }
            .password-input { display: flex; gap: 0.5rem; }
            .password-input input { flex: 1; }
            .password-toggle { background: none; border: none; cursor: pointer; color: var(--muted); }
            .password-requirements { list-style: none; padding: 0; margin: 0.25rem 0 0; font-size: 0.85rem; color: var(--muted); }
            .password-requirements li.valid { color: var(--success); }
            .filter-buttons { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.5rem; }
            .filter-btn {
                padding: 0.4rem 1rem;
                border: 1px solid var(--border);
                border-radius: 999px;
                background: var(--surface);
                color: var(--text);
                cursor: pointer;
            }
            .filter-btn.active { background: var(--accent); border-color: var(--accent); color: #fff; }
            .site-footer {
                padding: 2rem 1.5rem;
                text-align: center;
                color: var(--muted);
                border-top: 1px solid var(--border);
            }
        "#)} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_toggle_twice_returns_to_start() {
        for start in [Theme::Light, Theme::Dark] {
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn test_persisted_value_matches_displayed() {
        let store = MemoryStore::new();
        let mut theme = Theme::Light;
        for _ in 0..3 {
            theme = toggle_and_persist(&store, theme).unwrap();
            let saved = store.get(config::THEME_KEY).unwrap();
            assert_eq!(saved.as_deref(), Some(theme.as_str()));
        }
        assert_eq!(resolve_initial(&store, false), theme);
    }

    #[test]
    fn test_initial_theme_falls_back_to_system_preference() {
        let store = MemoryStore::new();
        assert_eq!(resolve_initial(&store, true), Theme::Dark);
        assert_eq!(resolve_initial(&store, false), Theme::Light);
    }

    #[test]
    fn test_saved_theme_wins_over_system_preference() {
        let store = MemoryStore::new();
        store.set(config::THEME_KEY, "light").unwrap();
        assert_eq!(resolve_initial(&store, true), Theme::Light);
    }

    #[test]
    fn test_unknown_saved_value_is_ignored() {
        let store = MemoryStore::new();
        store.set(config::THEME_KEY, "sepia").unwrap();
        assert_eq!(resolve_initial(&store, true), Theme::Dark);
    }

    #[test]
    fn test_icon_points_at_other_theme() {
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
    }
}
