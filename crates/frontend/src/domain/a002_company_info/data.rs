//! Статические контакты и реквизиты компании.
//!
//! Чисто отображаемый контент, не входит в модель заявки.

/// Строка карточки «Контакты»
pub struct ContactEntry {
    pub icon: &'static str,
    pub label: &'static str,
    pub lines: &'static [&'static str],
}

pub const CONTACTS: &[ContactEntry] = &[
    ContactEntry {
        icon: "map-pin",
        label: "Адрес",
        lines: &["г. Москва, ул. Заречная, д. 9, офис 301"],
    },
    ContactEntry {
        icon: "phone",
        label: "Телефон",
        lines: &["8 499 322 83 85"],
    },
    ContactEntry {
        icon: "mail",
        label: "Email",
        lines: &["melnikov@bkr-credit.ru"],
    },
    ContactEntry {
        icon: "clock",
        label: "Режим работы",
        lines: &["Пн-Пт: 9:00 - 19:00", "Сб-Вс: 10:00 - 16:00"],
    },
];

/// Строка карточки «Реквизиты компании»
pub struct RequisiteEntry {
    pub label: &'static str,
    pub value: &'static str,
}

pub const REQUISITES: &[RequisiteEntry] = &[
    RequisiteEntry { label: "ООО:", value: "«Бюро Кредитных Решений»" },
    RequisiteEntry { label: "ИНН:", value: "7701234567" },
    RequisiteEntry { label: "КПП:", value: "770101001" },
    RequisiteEntry { label: "ОГРН:", value: "1234567890123" },
    RequisiteEntry { label: "Р/С:", value: "40702810100000000000" },
    RequisiteEntry { label: "Банк:", value: "ПАО «Сбербанк»" },
    RequisiteEntry { label: "БИК:", value: "044525225" },
    RequisiteEntry { label: "К/С:", value: "30101810400000000225" },
];

/// Бейдж доверия под карточками
pub struct TrustBadge {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const TRUST_BADGES: &[TrustBadge] = &[
    TrustBadge { icon: "shield", text: "Гарантия безопасности" },
    TrustBadge { icon: "award", text: "Лицензия ЦБ РФ" },
    TrustBadge { icon: "users", text: "10 000+ клиентов" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_data_is_complete() {
        assert_eq!(CONTACTS.len(), 4);
        assert_eq!(REQUISITES.len(), 8);
        assert_eq!(TRUST_BADGES.len(), 3);
    }

    #[test]
    fn test_no_empty_values() {
        for entry in CONTACTS {
            assert!(!entry.label.is_empty());
            assert!(!entry.lines.is_empty());
        }
        for entry in REQUISITES {
            assert!(!entry.label.is_empty());
            assert!(!entry.value.is_empty());
        }
    }
}
