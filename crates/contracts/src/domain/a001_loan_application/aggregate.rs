use crate::shared::notifications::Notification;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Credit type
// ============================================================================

/// Вид кредита, выбираемый в заявке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditType {
    Consumer,
    Mortgage,
}

impl CreditType {
    /// Строковое значение для radio-инпутов и сериализации
    pub fn as_str(&self) -> &'static str {
        match self {
            CreditType::Consumer => "consumer",
            CreditType::Mortgage => "mortgage",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "consumer" => Some(CreditType::Consumer),
            "mortgage" => Some(CreditType::Mortgage),
            _ => None,
        }
    }
}

impl Default for CreditType {
    fn default() -> Self {
        CreditType::Consumer
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Черновик заявки на кредит.
///
/// Единственный экземпляр на сессию: создаётся с дефолтами при монтировании
/// формы, меняется по одному полю на каждое событие ввода и сбрасывается
/// к дефолтам после успешной отправки.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub name: String,
    pub phone: String,
    /// Сумма кредита как текст — диапазон и валюта намеренно не проверяются
    pub amount: String,
    pub credit_type: CreditType,
    pub consent: bool,
}

impl Default for ApplicationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            amount: String::new(),
            credit_type: CreditType::Consumer,
            consent: false,
        }
    }
}

/// Замена одного поля черновика (last-write-wins, без валидации)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Name(String),
    Phone(String),
    Amount(String),
    CreditType(CreditType),
    Consent(bool),
}

impl ApplicationDraft {
    /// Применить изменение одного поля. Всегда успешно, остальные поля
    /// не затрагиваются.
    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::Name(v) => self.name = v,
            DraftField::Phone(v) => self.phone = v,
            DraftField::Amount(v) => self.amount = v,
            DraftField::CreditType(v) => self.credit_type = v,
            DraftField::Consent(v) => self.consent = v,
        }
    }

    /// Проверить единственное бизнес-правило заявки.
    ///
    /// Имя, телефон и сумма проверяются только атрибутом `required`
    /// на уровне инпутов и здесь повторно не валидируются.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.consent {
            return Err(ValidationError::ConsentRequired);
        }
        Ok(())
    }

    /// Локальный цикл отправки: проверка согласия, затем сброс черновика.
    ///
    /// Никакой передачи данных наружу не происходит — «отправка» это
    /// переход состояния плюс уведомление пользователю. При ошибке
    /// черновик остаётся без изменений.
    pub fn submit(&mut self) -> Result<Notification, ValidationError> {
        self.validate()?;

        *self = Self::default();
        Ok(Notification::success(
            "Заявка отправлена",
            "Наш специалист свяжется с вами в ближайшее время",
        ))
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Единственный вид ошибки формы: не отмечено согласие на обработку
/// персональных данных. Всегда восстановима, показывается пользователю
/// уведомлением и никуда дальше не распространяется.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Необходимо согласие на обработку персональных данных")]
    ConsentRequired,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::NotificationSeverity;

    #[test]
    fn test_default_draft() {
        let draft = ApplicationDraft::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.phone, "");
        assert_eq!(draft.amount, "");
        assert_eq!(draft.credit_type, CreditType::Consumer);
        assert!(!draft.consent);
    }

    #[test]
    fn test_apply_last_write_wins() {
        let mut draft = ApplicationDraft::default();
        draft.apply(DraftField::Name("Пётр".to_string()));
        draft.apply(DraftField::Phone("+79991234567".to_string()));
        draft.apply(DraftField::Name("Иван".to_string()));

        assert_eq!(draft.name, "Иван");
        // соседние поля не затронуты
        assert_eq!(draft.phone, "+79991234567");
        assert_eq!(draft.amount, "");
    }

    #[test]
    fn test_apply_idempotent() {
        let mut draft = ApplicationDraft::default();
        draft.apply(DraftField::Amount("500000".to_string()));
        let after_first = draft.clone();
        draft.apply(DraftField::Amount("500000".to_string()));
        assert_eq!(draft, after_first);
    }

    #[test]
    fn test_submit_without_consent() {
        let mut draft = ApplicationDraft::default();
        draft.apply(DraftField::Name("Иван".to_string()));

        let err = draft.submit().unwrap_err();
        assert_eq!(err, ValidationError::ConsentRequired);
        assert_eq!(
            err.to_string(),
            "Необходимо согласие на обработку персональных данных"
        );
        // черновик не изменился и не сбросился
        assert_eq!(draft.name, "Иван");
        assert!(!draft.consent);
    }

    #[test]
    fn test_submit_ignores_empty_fields_when_consent_given() {
        // программно проверяется только согласие; пустые имя/телефон/сумма
        // остаются заботой required-атрибутов на инпутах
        let mut draft = ApplicationDraft::default();
        draft.apply(DraftField::Consent(true));
        assert!(draft.submit().is_ok());
    }

    #[test]
    fn test_submit_success_resets_draft() {
        let mut draft = ApplicationDraft::default();
        draft.apply(DraftField::Name("Иван".to_string()));
        draft.apply(DraftField::Phone("+79991234567".to_string()));
        draft.apply(DraftField::Amount("500000".to_string()));
        draft.apply(DraftField::CreditType(CreditType::Mortgage));
        draft.apply(DraftField::Consent(true));

        let notification = draft.submit().unwrap();
        assert_eq!(notification.severity, NotificationSeverity::Success);
        assert_eq!(notification.title, "Заявка отправлена");
        assert_eq!(
            notification.description,
            "Наш специалист свяжется с вами в ближайшее время"
        );
        assert_eq!(draft, ApplicationDraft::default());
    }

    #[test]
    fn test_form_is_reenterable_after_submit() {
        let mut draft = ApplicationDraft::default();
        draft.apply(DraftField::Consent(true));
        draft.submit().unwrap();

        draft.apply(DraftField::Name("Мария".to_string()));
        assert_eq!(draft.name, "Мария");
        assert!(draft.submit().is_err());
    }

    #[test]
    fn test_credit_type_serde_names() {
        assert_eq!(
            serde_json::to_string(&CreditType::Consumer).unwrap(),
            "\"consumer\""
        );
        assert_eq!(
            serde_json::to_string(&CreditType::Mortgage).unwrap(),
            "\"mortgage\""
        );
        assert_eq!(CreditType::parse("mortgage"), Some(CreditType::Mortgage));
        assert_eq!(CreditType::parse("unknown"), None);
    }

    #[test]
    fn test_draft_serde_camel_case() {
        let json = serde_json::to_value(ApplicationDraft::default()).unwrap();
        assert_eq!(json["creditType"], "consumer");
        assert_eq!(json["consent"], false);
    }
}
