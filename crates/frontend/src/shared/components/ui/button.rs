use leptos::prelude::*;

/// Кнопка. Стили — классы `button` / `button--primary` из stylesheet.
#[component]
pub fn Button(
    /// Атрибут type ("button" по умолчанию, "submit" для форм)
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Дополнительные CSS-классы
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Обработчик клика (не нужен для submit-кнопок)
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type=btn_type
            class=move || format!("button button--primary {}", additional_class())
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
