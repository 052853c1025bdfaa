use crate::shared::notifications::NotificationService;
use contracts::domain::a001_loan_application::{ApplicationDraft, DraftField};
use contracts::shared::notifications::Notification;
use leptos::prelude::*;

/// ViewModel формы заявки.
///
/// Владеет единственным черновиком сессии и реализует цикл
/// «ввод → проверка согласия → уведомление → сброс». Вся логика
/// по существу живёт в [`ApplicationDraft`], здесь — только сигнал
/// и побочный эффект уведомления.
#[derive(Clone, Copy)]
pub struct LoanFormViewModel {
    pub draft: RwSignal<ApplicationDraft>,
}

impl LoanFormViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(ApplicationDraft::default()),
        }
    }

    /// Заменить одно поле черновика. Без валидации, всегда успешно.
    pub fn update_field(&self, field: DraftField) {
        self.draft.update(|draft| draft.apply(field));
    }

    /// Отправить заявку.
    ///
    /// Синхронная локальная операция: при отмеченном согласии черновик
    /// сбрасывается и показывается тост-подтверждение, иначе — тост
    /// с ошибкой, черновик не меняется.
    pub fn submit(&self, notifications: NotificationService) {
        let mut draft = self.draft.get();
        let submitted = draft.clone();

        match draft.submit() {
            Ok(confirmation) => {
                if let Ok(json) = serde_json::to_string(&submitted) {
                    log::debug!("заявка принята: {}", json);
                }
                self.draft.set(draft);
                notifications.show(confirmation);
            }
            Err(err) => {
                // отсутствие согласия — не системный сбой, в лог не пишем
                notifications.show(Notification::error("Ошибка", err.to_string()));
            }
        }
    }
}

impl Default for LoanFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
