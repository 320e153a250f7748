use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    /// `(tab id, label)` pairs in display order.
    pub tabs: &'static [(&'static str, &'static str)],
    pub active: &'static str,
    pub on_select: Callback<&'static str>,
}

/// Row of tab buttons. The owner decides which panel to render for `active`.
#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="tab-buttons" role="tablist">
            { for props.tabs.iter().map(|(id, label)| {
                let id = *id;
                let selected = props.active == id;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(id))
                };
                html! {
                    <button
                        class={classes!("tab-btn", selected.then(|| "active"))}
                        role="tab"
                        aria-selected={selected.to_string()}
                        data-tab={id}
                        {onclick}
                    >
                        {*label}
                    </button>
                }
            }) }
            <style>
                {r#"
                .tab-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .tab-btn {
                    padding: 0.5rem 1.25rem;
                    border: 1px solid var(--border);
                    border-radius: 999px;
                    background: var(--surface);
                    color: var(--text);
                    cursor: pointer;
                }
                .tab-btn.active {
                    background: var(--accent);
                    border-color: var(--accent);
                    color: #fff;
                }
                "#}
            </style>
        </div>
    }
}
