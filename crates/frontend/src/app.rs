use crate::domain::a001_loan_application::ui::form::LoanApplicationForm;
use crate::domain::a002_company_info::ui::{ContactsCard, RequisitesCard, TrustBadges};
use crate::layout::{PageFooter, PageHeader};
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Единственный сервис приложения: показ транзиентных уведомлений
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <div class="page">
                <PageHeader />

                <main class="page__main">
                    <div class="page__grid">
                        <LoanApplicationForm />

                        <div class="page__info">
                            <ContactsCard />
                            <RequisitesCard />
                            <TrustBadges />
                        </div>
                    </div>
                </main>

                <PageFooter />
                <NotificationHost />
            </div>
        </ConfigProvider>
    }
}
