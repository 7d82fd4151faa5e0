//! Modal surfaces: the shared notification modal and the generic
//! confirmation modal used by both the discard and save flows.

use leptos::*;

use crate::types::Notice;

/// Shared notification surface. Every validation, configuration and
/// transport error funnels into this one modal; success notices use the
/// same surface with their own styling.
#[component]
pub fn NoticeModal(
    notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
) -> impl IntoView {
    let box_class = move || match notice.get() {
        Some(Notice::Success(_)) => "modal-box modal-success",
        _ => "modal-box modal-error",
    };
    let title = move || match notice.get() {
        Some(Notice::Success(_)) => "Éxito",
        _ => "Error",
    };
    let text = move || match notice.get() {
        Some(Notice::Error(msg)) | Some(Notice::Success(msg)) => msg,
        None => String::new(),
    };

    view! {
        <Show when=move || notice.get().is_some() fallback=|| view! {}>
            <div class="modal-backdrop">
                <div class=box_class>
                    <h3 class="modal-title">{title}</h3>
                    <p class="modal-text">{text}</p>
                    <div class="modal-actions">
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| set_notice.set(None)
                        >
                            "Cerrar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Confirmation gate for destructive or remote actions. Nothing happens
/// until the user explicitly confirms; cancel leaves the basket unchanged.
#[component]
pub fn ConfirmModal(
    title: &'static str,
    message: &'static str,
    confirm_label: &'static str,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal-box">
                <h3 class="modal-title">{title}</h3>
                <p class="modal-text">{message}</p>
                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.call(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| on_confirm.call(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
