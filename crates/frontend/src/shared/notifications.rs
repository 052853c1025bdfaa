use crate::shared::icons::icon;
use contracts::shared::notifications::{Notification, NotificationSeverity};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Сколько миллисекунд тост остаётся на экране до автозакрытия
const AUTO_DISMISS_MS: u32 = 4000;

/// Сервис транзиентных уведомлений.
///
/// Кладётся в context на уровне [`crate::app::App`]. Показывает один тост
/// за раз: новый заменяет предыдущий, открытый тост закрывается сам
/// через [`AUTO_DISMISS_MS`] или по кнопке закрытия.
///
/// ```rust,no_run
/// # use leptos::prelude::*;
/// # use contracts::shared::notifications::Notification;
/// # use frontend::shared::notifications::NotificationService;
/// let notifications = use_context::<NotificationService>().unwrap();
/// notifications.show(Notification::success("Готово", "Заявка отправлена"));
/// ```
#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Notification>>,
    seq: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            seq: RwSignal::new(0),
        }
    }

    /// Показать тост, заменив текущий
    pub fn show(&self, notification: Notification) {
        let id = self.seq.get_untracked() + 1;
        self.seq.set(id);
        self.current.set(Some(notification));

        let current = self.current;
        let seq = self.seq;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            // устаревший таймер не должен закрывать более новый тост
            if seq.get_untracked() == id {
                current.set(None);
            }
        });
    }

    /// Закрыть тост немедленно
    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// CSS-модификатор тоста по важности уведомления
pub fn severity_class(severity: NotificationSeverity) -> &'static str {
    match severity {
        NotificationSeverity::Success => "toast--success",
        NotificationSeverity::Error => "toast--error",
    }
}

/// Рендерит текущий тост [`NotificationService`] поверх страницы
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_context::<NotificationService>()
        .expect("NotificationService not provided in context");

    view! {
        {move || {
            match service.current.get() {
                Some(n) => view! {
                    <div class=format!("toast {}", severity_class(n.severity)) role="status">
                        <div class="toast__body">
                            <p class="toast__title">{n.title.clone()}</p>
                            <p class="toast__description">{n.description.clone()}</p>
                        </div>
                        <button
                            class="toast__close"
                            aria-label="Закрыть"
                            on:click=move |_| service.dismiss()
                        >
                            {icon("x", 16)}
                        </button>
                    </div>
                }.into_any(),
                None => view! { <></> }.into_any(),
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_class() {
        assert_eq!(severity_class(NotificationSeverity::Success), "toast--success");
        assert_eq!(severity_class(NotificationSeverity::Error), "toast--error");
    }
}
