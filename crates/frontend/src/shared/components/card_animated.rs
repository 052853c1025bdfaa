//! Обёртка над Thaw [`Card`] с анимацией появления.
//!
//! Анимация `card-rise` определена в `assets/styles.css`. Задержка
//! `delay_ms` даёт каскадное появление карточек правой колонки.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные inline-стили (после стилей анимации)
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-rise 0.3s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-rise 0.3s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
