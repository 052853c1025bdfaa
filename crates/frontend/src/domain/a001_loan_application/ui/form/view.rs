use super::view_model::LoanFormViewModel;
use crate::shared::components::ui::{Button, Checkbox, Input, RadioGroup, RadioOption};
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_loan_application::{CreditType, DraftField};
use leptos::prelude::*;

const CREDIT_TYPE_OPTIONS: [RadioOption; 2] = [
    RadioOption {
        value: "consumer",
        label: "Потребительский кредит",
        icon: "wallet",
    },
    RadioOption {
        value: "mortgage",
        label: "Ипотечный кредит",
        icon: "home",
    },
];

/// Карточка «Заявка на кредит» с контролируемой формой
#[component]
pub fn LoanApplicationForm() -> impl IntoView {
    let vm = LoanFormViewModel::new();
    let notifications = use_context::<NotificationService>()
        .expect("NotificationService not provided in context");

    view! {
        <CardAnimated>
            <div class="card__header">
                <h2 class="card__title">"Заявка на кредит"</h2>
                <p class="card__description">
                    "Заполните форму, и наш специалист свяжется с вами в течение 30 минут"
                </p>
            </div>

            <form
                class="loan-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit(notifications);
                }
            >
                <Input
                    id="name"
                    label="Имя"
                    placeholder="Иван Иванов"
                    required=true
                    value=Signal::derive(move || vm.draft.get().name)
                    on_input=Callback::new(move |v| vm.update_field(DraftField::Name(v)))
                />

                <Input
                    id="phone"
                    label="Телефон"
                    input_type="tel"
                    placeholder="+7 (999) 123-45-67"
                    required=true
                    value=Signal::derive(move || vm.draft.get().phone)
                    on_input=Callback::new(move |v| vm.update_field(DraftField::Phone(v)))
                />

                <Input
                    id="amount"
                    label="Желаемая сумма кредита (₽)"
                    input_type="number"
                    placeholder="500000"
                    required=true
                    value=Signal::derive(move || vm.draft.get().amount)
                    on_input=Callback::new(move |v| vm.update_field(DraftField::Amount(v)))
                />

                <RadioGroup
                    label="Вид кредита"
                    name="credit-type"
                    value=Signal::derive(move || vm.draft.get().credit_type.as_str().to_string())
                    options=CREDIT_TYPE_OPTIONS.to_vec()
                    on_change=Callback::new(move |v: String| {
                        if let Some(credit_type) = CreditType::parse(&v) {
                            vm.update_field(DraftField::CreditType(credit_type));
                        }
                    })
                />

                <Checkbox
                    id="consent"
                    label="Нажимая кнопку, вы соглашаетесь с политикой конфиденциальности"
                    checked=Signal::derive(move || vm.draft.get().consent)
                    on_change=Callback::new(move |v| vm.update_field(DraftField::Consent(v)))
                />

                <Button button_type="submit" class="loan-form__submit">
                    {icon("send", 20)}
                    "Отправить заявку"
                </Button>
            </form>
        </CardAnimated>
    }
}
