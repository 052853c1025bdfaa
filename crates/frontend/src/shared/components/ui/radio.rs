use crate::shared::icons::icon;
use leptos::prelude::*;

/// Вариант для [`RadioGroup`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioOption {
    pub value: &'static str,
    pub label: &'static str,
    /// Имя иконки из [`crate::shared::icons`]
    pub icon: &'static str,
}

#[component]
fn Radio(
    option: RadioOption,
    name: &'static str,
    #[prop(into)] checked_value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let RadioOption {
        value,
        label,
        icon: icon_name,
    } = option;
    let radio_id = format!("radio-{}", value);
    let is_checked = move || checked_value.get() == value;

    view! {
        <div class="form__radio-wrapper">
            <input
                id=radio_id.clone()
                type="radio"
                class="form__radio"
                name=name
                value=value
                prop:checked=is_checked
                on:change=move |_| on_change.run(value.to_string())
            />
            <label class="form__radio-label" for=radio_id>
                {icon(icon_name, 18)}
                <span>{label}</span>
            </label>
        </div>
    }
}

/// Группа radio-кнопок с общей подписью
#[component]
pub fn RadioGroup(
    /// Подпись группы
    label: &'static str,
    /// Имя группы (атрибут name у инпутов)
    name: &'static str,
    /// Текущее выбранное значение
    #[prop(into)]
    value: Signal<String>,
    /// Обработчик выбора
    on_change: Callback<String>,
    /// Варианты выбора
    options: Vec<RadioOption>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <span class="form__label">{label}</span>
            <div class="form__radio-group">
                <For
                    each=move || options.clone()
                    key=|option| option.value
                    children=move |option| {
                        view! {
                            <Radio
                                option=option
                                name=name
                                checked_value=value
                                on_change=on_change
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}
