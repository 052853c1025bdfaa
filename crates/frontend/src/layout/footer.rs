use leptos::prelude::*;

#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer class="page-footer">
            <p class="page-footer__copyright">
                "© 2024 Бюро Кредитных Решений. Все права защищены."
            </p>
            <p class="page-footer__license">"Лицензия ЦБ РФ № 123456"</p>
        </footer>
    }
}
