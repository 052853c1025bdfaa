use super::data::{CONTACTS, REQUISITES, TRUST_BADGES};
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка «Контакты»
#[component]
pub fn ContactsCard() -> impl IntoView {
    view! {
        <CardAnimated delay_ms=150>
            <div class="card__header">
                <h2 class="card__title card__title--with-icon">
                    {icon("phone", 24)}
                    "Контакты"
                </h2>
            </div>
            <div class="contacts">
                {CONTACTS
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="contacts__entry">
                                <span class="contacts__icon">{icon(entry.icon, 20)}</span>
                                <div>
                                    <p class="contacts__label">{entry.label}</p>
                                    {entry
                                        .lines
                                        .iter()
                                        .map(|line| view! { <p class="contacts__value">{*line}</p> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </CardAnimated>
    }
}

/// Карточка «Реквизиты компании»
#[component]
pub fn RequisitesCard() -> impl IntoView {
    view! {
        <CardAnimated delay_ms=250>
            <div class="card__header">
                <h2 class="card__title card__title--with-icon">
                    {icon("file-text", 24)}
                    "Реквизиты компании"
                </h2>
            </div>
            <div class="requisites">
                {REQUISITES
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="requisites__row">
                                <p class="requisites__label">{entry.label}</p>
                                <p class="requisites__value">{entry.value}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </CardAnimated>
    }
}

/// Три бейджа доверия под карточками
#[component]
pub fn TrustBadges() -> impl IntoView {
    view! {
        <div class="trust-badges">
            {TRUST_BADGES
                .iter()
                .enumerate()
                .map(|(i, badge)| {
                    view! {
                        <CardAnimated delay_ms={350 + (i as u32) * 80}>
                            <div class="trust-badges__item">
                                <span class="trust-badges__icon">{icon(badge.icon, 32)}</span>
                                <p class="trust-badges__text">{badge.text}</p>
                            </div>
                        </CardAnimated>
                    }
                })
                .collect_view()}
        </div>
    }
}
