//! Toast layer for transient notices
//!
//! Provides toast-style notifications for form feedback and
//! work-in-progress hints, stacked in the top-right corner.

use crate::core::notice::{Notice, NoticeKind};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of toasts to show at once
const MAX_NOTICES: usize = 5;

/// Notice with a unique ID for tracking
#[derive(Clone, Debug)]
pub struct NoticeItem {
    pub id: u64,
    pub notice: Notice,
}

/// Toasts container component
/// Place this once at the app level, above the router content
#[component]
pub fn Toaster(
    /// Signal containing the list of active notices
    notices: RwSignal<VecDeque<NoticeItem>>,
) -> impl IntoView {
    view! {
        <div class="fixed top-20 right-4 z-50 flex flex-col gap-2 max-w-sm">
            {move || {
                notices.get().into_iter().map(|item| {
                    let id = item.id;
                    let notice = item.notice.clone();

                    view! {
                        <NoticeToast notice=notice id=id notices=notices />
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Single toast component
#[component]
fn NoticeToast(
    notice: Notice,
    id: u64,
    notices: RwSignal<VecDeque<NoticeItem>>,
) -> impl IntoView {
    let (is_visible, _set_is_visible) = signal(true);
    let (is_exiting, _set_is_exiting) = signal(false);

    // Auto-dismiss if specified
    if let Some(_ms) = notice.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                // Wait for exit animation
                TimeoutFuture::new(300).await;
                _set_is_visible.set(false);
                notices.update(|n| {
                    n.retain(|i| i.id != id);
                });
            });
        }
    }

    let (bg_class, border_class, icon_class) = match notice.kind {
        NoticeKind::Success => ("bg-green-500/10", "border-green-500/30", "text-green-400"),
        NoticeKind::Error => ("bg-red-500/10", "border-red-500/30", "text-red-400"),
        NoticeKind::Warning => (
            "bg-yellow-500/10",
            "border-yellow-500/30",
            "text-yellow-400",
        ),
        NoticeKind::Info => ("bg-orange-500/10", "border-orange-500/30", "text-orange-400"),
    };

    let icon_path = match notice.kind {
        NoticeKind::Success => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        NoticeKind::Error => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        NoticeKind::Warning => {
            "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"
        }
        NoticeKind::Info => "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    };

    let title = notice.title.clone();
    let message = notice.message.clone();
    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border backdrop-blur-sm shadow-lg transition-all duration-300 {} {}",
        bg_class, border_class
    );

    view! {
        <Show when=move || is_visible.get()>
            <div
                class=container_class.clone()
                style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
            >
                <div class=icon_class>
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
                    </svg>
                </div>
                <div class="flex-1 min-w-0">
                    <h4 class="text-sm font-medium text-white">{title.clone()}</h4>
                    <p class="text-xs text-gray-300 mt-0.5">{message.clone()}</p>
                </div>
                <button
                    class="text-gray-400 hover:text-white transition-colors"
                    on:click=move |_| {
                        notices.update(|n| {
                            n.retain(|i| i.id != id);
                        });
                    }
                >
                    <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                    </svg>
                </button>
            </div>
        </Show>
    }
}

/// Handle for emitting notices from any component
#[derive(Clone, Copy)]
pub struct NoticeManager {
    notices: RwSignal<VecDeque<NoticeItem>>,
    next_id: RwSignal<u64>,
}

impl NoticeManager {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notices signal for the [`Toaster`]
    pub fn notices(&self) -> RwSignal<VecDeque<NoticeItem>> {
        self.notices
    }

    /// Add a notice
    pub fn notify(&self, notice: Notice) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        self.notices.update(|n| {
            n.push_back(NoticeItem { id, notice });

            // Remove oldest if we exceed max
            while n.len() > MAX_NOTICES {
                n.pop_front();
            }
        });
    }

    /// Add a success notice
    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::success(title, message));
    }

    /// Add an error notice
    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::error(title, message));
    }

    /// Add a warning notice
    pub fn warning(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::warning(title, message));
    }

    /// Add an info notice
    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::info(title, message));
    }

    /// Clear all notices
    pub fn clear(&self) {
        self.notices.set(VecDeque::new());
    }
}

impl Default for NoticeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the notice manager to the application
pub fn provide_notice_manager() -> NoticeManager {
    let manager = NoticeManager::new();
    provide_context(manager);
    manager
}

/// Use the notice manager from anywhere in the component tree
pub fn use_notice_manager() -> NoticeManager {
    use_context::<NoticeManager>().expect("NoticeManager should be provided")
}
