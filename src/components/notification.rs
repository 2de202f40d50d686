use yew::prelude::*;

use crate::notify::{NoticeKind, Toast};

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub toast: Toast,
    pub on_dismiss: Callback<MouseEvent>,
}

/// Transient toast overlay. Mounting, the `visible` class, and unmounting
/// are all driven by the toast state machine owned by the page; this
/// component only renders the current stage.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let NotificationProps { toast, on_dismiss } = props;

    if !toast.mounted() {
        return html! {};
    }

    html! {
        <div class={classes!(
            "notification",
            toast.kind.css_class(),
            toast.visible().then_some("visible"),
        )}>
            { kind_icon(toast.kind) }
            <span class="notification-message">{ toast.message.clone() }</span>
            <button class="notification-close" onclick={on_dismiss.clone()} aria-label="Dismiss notification">
                <svg width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                    <path d="M18 6L6 18M6 6l12 12" />
                </svg>
            </button>
            <style>
                {r#"
                    .notification {
                        position: fixed;
                        top: 1rem;
                        right: 1rem;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
                        z-index: 100;
                        opacity: 0;
                        transform: translateY(-12px);
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }

                    .notification.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .notification.success {
                        background: #f0fdf4;
                        color: #15803d;
                        border: 1px solid #bbf7d0;
                    }

                    .notification.info {
                        background: #eff6ff;
                        color: #1d4ed8;
                        border: 1px solid #bfdbfe;
                    }

                    .notification-message {
                        font-size: 0.95rem;
                    }

                    .notification-close {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 0.25rem;
                        margin-left: 0.5rem;
                        border: none;
                        border-radius: 50%;
                        background: transparent;
                        color: inherit;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }

                    .notification-close:hover {
                        background: rgba(0, 0, 0, 0.08);
                    }
                "#}
            </style>
        </div>
    }
}

fn kind_icon(kind: NoticeKind) -> Html {
    match kind {
        NoticeKind::Success => html! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
                <path d="M22 4L12 14.01l-3-3" />
            </svg>
        },
        NoticeKind::Info => html! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <circle cx="12" cy="12" r="10" />
                <path d="M12 8v4M12 16h.01" />
            </svg>
        },
    }
}
