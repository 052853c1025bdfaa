use crate::shared::icons::icon;
use leptos::prelude::*;

/// Шапка лендинга: логотип, название компании и слоган
#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__inner">
                <span class="page-header__logo">{icon("trending-up", 32)}</span>
                <div>
                    <h1 class="page-header__title">"Бюро Кредитных Решений"</h1>
                    <p class="page-header__tagline">"Надежный партнер в мире финансов"</p>
                </div>
            </div>
        </header>
    }
}
