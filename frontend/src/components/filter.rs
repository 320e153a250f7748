use yew::prelude::*;

pub const ALL: &str = "all";

/// `all` shows every item; any other category shows only its own items.
pub fn category_visible(selected: &str, item_category: &str) -> bool {
    selected == ALL || selected == item_category
}

#[derive(Properties, PartialEq)]
pub struct CategoryFilterBarProps {
    /// `(category, label)` pairs. The first button should be `all`.
    pub categories: &'static [(&'static str, &'static str)],
    pub selected: &'static str,
    pub on_select: Callback<&'static str>,
}

#[function_component(CategoryFilterBar)]
pub fn category_filter_bar(props: &CategoryFilterBarProps) -> Html {
    html! {
        <div class="filter-buttons">
            { for props.categories.iter().map(|(category, label)| {
                let category = *category;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(category))
                };
                html! {
                    <button
                        class={classes!("filter-btn", (props.selected == category).then(|| "active"))}
                        data-category={category}
                        {onclick}
                    >
                        {*label}
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shows_everything() {
        assert!(category_visible(ALL, "cardio"));
        assert!(category_visible(ALL, "strength"));
    }

    #[test]
    fn test_specific_category_hides_others() {
        assert!(category_visible("yoga", "yoga"));
        assert!(!category_visible("yoga", "cardio"));
    }
}
