use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SuccessMessageProps {
    /// Nothing is rendered while this is `None`.
    pub message: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(SuccessMessage)]
pub fn success_message(props: &SuccessMessageProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };

    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="success-message" role="status">
            <i class="fas fa-check-circle"></i>
            <span>{message}</span>
            <button class="success-close" aria-label="Dismiss" {onclick}>
                <i class="fas fa-times"></i>
            </button>
            <style>
                {r#"
                .success-message {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin: 1rem 0;
                    padding: 1rem 1.25rem;
                    border-radius: 8px;
                    background: rgba(39, 174, 96, 0.12);
                    border: 1px solid #27AE60;
                    color: var(--text);
                    animation: slideIn 0.3s ease-out;
                }
                .success-message .fa-check-circle { color: #27AE60; }
                .success-message span { flex: 1; }
                .success-close {
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: var(--muted);
                }
                @keyframes slideIn {
                    from { transform: translateY(-10px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
