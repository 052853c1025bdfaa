use leptos::prelude::*;

/// Контролируемый чекбокс с подписью справа
#[component]
pub fn Checkbox(
    /// ID чекбокса (на него же указывает label)
    id: &'static str,
    /// Текст подписи
    label: &'static str,
    /// Текущее состояние (controlled)
    #[prop(into)]
    checked: Signal<bool>,
    /// Обработчик переключения
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=id>
                {label}
            </label>
        </div>
    }
}
