use leptos::prelude::*;

/// Контролируемый текстовый инпут с подписью
#[component]
pub fn Input(
    /// ID инпута (на него же указывает label)
    id: &'static str,
    /// Текст подписи
    label: &'static str,
    /// Текущее значение (controlled)
    #[prop(into)]
    value: Signal<String>,
    /// Обработчик ввода
    on_input: Callback<String>,
    /// Тип инпута: "text" (по умолчанию), "tel", "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Браузерная проверка обязательности поля
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=id>
                {label}
            </label>
            <input
                id=id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                required=required
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
