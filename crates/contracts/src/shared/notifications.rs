use serde::{Deserialize, Serialize};

/// Важность уведомления — определяет оформление тоста
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationSeverity {
    Success,
    Error,
}

/// Транзиентное уведомление пользователю. Нигде не сохраняется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: NotificationSeverity,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: NotificationSeverity::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: NotificationSeverity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serde_names() {
        assert_eq!(
            serde_json::to_string(&NotificationSeverity::Error).unwrap(),
            "\"error\""
        );
        assert_eq!(
            serde_json::to_string(&NotificationSeverity::Success).unwrap(),
            "\"success\""
        );
    }

    #[test]
    fn test_constructors() {
        let n = Notification::error("Ошибка", "текст");
        assert_eq!(n.severity, NotificationSeverity::Error);
        assert_eq!(n.title, "Ошибка");
    }
}
