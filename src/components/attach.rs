//! Attachment upload widget: drop zone with drag & drop support, file
//! pickers, target selection and the confirmation-gated discard/save flows.

use gloo_timers::future::TimeoutFuture;
use gloo_utils::document;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, FileList as DomFileList, HtmlInputElement};

use crate::basket::{
    discard_gate, plan_intake, should_auto_reset, submit_gate, BasketCounts, DiscardGate,
    FileKind, SubmitOutcome, MSG_QUOTA,
};
use crate::components::{ConfirmModal, FileList};
use crate::config::{AUTO_RESET_DELAY_MS, DIRECTORS_URL, FILE_INPUT_ID};
use crate::services::{fetch_directors, submit_attachments, HostForm};
use crate::types::{DirectorsState, Notice, PendingAction, StagedFile};

#[component]
pub fn AttachSection(set_notice: WriteSignal<Option<Notice>>) -> impl IntoView {
    let (files, set_files) = create_signal(Vec::<StagedFile>::new());
    let (target, set_target) = create_signal(None::<String>);
    let (directors, set_directors) = create_signal(DirectorsState::Loading);
    let (pending, set_pending) = create_signal(None::<PendingAction>);
    let (is_uploading, set_is_uploading) = create_signal(false);
    let (is_dragover, set_is_dragover) = create_signal(false);

    // Cargar la lista de directores al montar. El control se degrada a un
    // placeholder deshabilitado, nunca rompe la página.
    spawn_local(async move {
        match fetch_directors(DIRECTORS_URL).await {
            Ok(list) if list.is_empty() => {
                log::warn!("⚠️ Lista de directores vacía");
                set_directors.set(DirectorsState::Empty);
            }
            Ok(list) => set_directors.set(DirectorsState::Ready(list)),
            Err(e) => {
                log::error!("❌ Error al cargar los directores de programa: {}", e);
                set_directors.set(DirectorsState::Failed);
                set_notice.set(Some(Notice::Error(format!(
                    "Error cargando directores: {}.",
                    e
                ))));
            }
        }
    });

    // Admisión de un lote de candidatos contra el estado actual del basket.
    // Una sola notificación por lote rechazado.
    let handle_files = move |list: DomFileList| {
        let mut incoming: Vec<web_sys::File> = Vec::new();
        for i in 0..list.length() {
            if let Some(file) = list.get(i) {
                log::debug!("Candidato: {} ({})", file.name(), file.type_());
                incoming.push(file);
            }
        }
        let kinds: Vec<FileKind> = incoming
            .iter()
            .map(|f| FileKind::from_mime(&f.type_()))
            .collect();
        let counts =
            files.with_untracked(|f| BasketCounts::from_kinds(f.iter().map(|s| s.kind)));
        let plan = plan_intake(&kinds, counts);

        if !plan.admitted.is_empty() {
            set_files.update(|basket| {
                for idx in &plan.admitted {
                    basket.push(StagedFile::new(incoming[*idx].clone()));
                }
            });
        }
        if plan.rejected {
            set_notice.set(Some(Notice::Error(MSG_QUOTA.to_string())));
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            handle_files(list);
        }
        // volver a elegir el mismo archivo debe disparar change de nuevo
        input.set_value("");
    };

    // The hidden input backs both the drop-zone click and the dedicated
    // picker buttons; the buttons narrow its accept/multiple first.
    let open_picker = move |config: Option<(&'static str, bool)>| {
        if let Some(input) = document()
            .get_element_by_id(FILE_INPUT_ID)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            if let Some((accept, multiple)) = config {
                input.set_accept(accept);
                input.set_multiple(multiple);
            }
            input.click();
        }
    };

    let on_discard = move |_| {
        let count = files.with(|f| f.len());
        match discard_gate(count, target.get().is_some()) {
            DiscardGate::Proceed => set_pending.set(Some(PendingAction::Discard)),
            DiscardGate::NoTarget => {
                set_notice.set(Some(Notice::Error(
                    crate::basket::MSG_SELECT_DIRECTOR.to_string(),
                )));
            }
            DiscardGate::Ignore => {}
        }
    };

    let on_save = move |_| {
        let count = files.with(|f| f.len());
        match submit_gate(count, target.get().is_some()) {
            Ok(()) => set_pending.set(Some(PendingAction::Save)),
            Err(gate) => set_notice.set(Some(Notice::Error(gate.message().to_string()))),
        }
    };

    let on_cancel_pending = move |_: ()| set_pending.set(None);

    let on_confirm_discard = move |_: ()| {
        set_pending.set(None);
        set_files.set(Vec::new());
        set_target.set(None);
    };

    let on_confirm_save = move |_: ()| {
        set_pending.set(None);

        // revalidación final antes de enviar, director primero
        let selected = target.get_untracked();
        let count = files.with_untracked(|f| f.len());
        if let Err(gate) = submit_gate(count, selected.is_some()) {
            set_notice.set(Some(Notice::Error(gate.message().to_string())));
            return;
        }
        let target_id = selected.unwrap_or_default();

        spawn_local(async move {
            set_is_uploading.set(true);

            let host = match HostForm::locate() {
                Ok(host) => host,
                Err(e) => {
                    log::error!("❌ {}", e);
                    set_notice.set(Some(Notice::Error(e.to_string())));
                    set_is_uploading.set(false);
                    return;
                }
            };

            log::info!("📤 Enviando {} archivo(s) a {}", count, host.action);
            let staged = files.get_untracked();
            let result = submit_attachments(&host, &target_id, &staged).await;
            set_is_uploading.set(false);

            match result {
                Ok(SubmitOutcome::Saved(msg)) => {
                    log::info!("✅ Archivos guardados: {}", msg);
                    set_notice.set(Some(Notice::Success(msg)));
                    if should_auto_reset(host.redirecting) {
                        TimeoutFuture::new(AUTO_RESET_DELAY_MS).await;
                        set_notice.set(None);
                        set_files.set(Vec::new());
                        set_target.set(None);
                    }
                }
                Ok(SubmitOutcome::Rejected(msg)) => {
                    log::error!("❌ Guardado rechazado: {}", msg);
                    set_notice.set(Some(Notice::Error(msg)));
                }
                Err(e) => {
                    log::error!("❌ Error en el envío: {}", e);
                    set_notice.set(Some(Notice::Error(e.to_string())));
                }
            }
        });
    };

    view! {
        <div class="attach-section">
            <div class="form-group">
                <label for="directorPrograma">"Director de programa"</label>
                <select
                    id="directorPrograma"
                    class="form-select"
                    disabled=move || !directors.with(|d| d.is_ready())
                    prop:value=move || target.get().unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_target.set(if value.is_empty() { None } else { Some(value) });
                    }
                >
                    <option value="">{move || directors.with(|d| d.placeholder())}</option>
                    <For
                        each=move || directors.with(|d| d.options())
                        key=|director| director.id.clone()
                        children=move |director| {
                            view! {
                                <option value=director.id.clone()>{director.nombre.clone()}</option>
                            }
                        }
                    />
                </select>
            </div>

            <div
                class="drop-area"
                id="dropArea"
                class:dragover=move || is_dragover.get()
                on:click=move |_| open_picker(None)
                on:dragover=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_is_dragover.set(true);
                }
                on:dragleave=move |_| set_is_dragover.set(false)
                on:drop=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_is_dragover.set(false);
                    if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
                        handle_files(list);
                    }
                }
            >
                <FileList files=files/>
            </div>

            <input
                type="file"
                id="fileInput"
                accept=".pdf,.zip"
                multiple=true
                style="display:none"
                on:change=on_file_change
            />

            <div class="picker-buttons">
                <button
                    class="btn btn-outline-secondary"
                    id="selectPdfFiles"
                    on:click=move |_| open_picker(Some((".pdf", true)))
                >
                    "Seleccionar PDF"
                </button>
                <button
                    class="btn btn-outline-secondary"
                    id="selectZipFolder"
                    on:click=move |_| open_picker(Some((".zip", false)))
                >
                    "Seleccionar ZIP"
                </button>
            </div>

            <div class="action-buttons">
                <button
                    class="btn btn-outline-danger"
                    disabled=move || is_uploading.get()
                    on:click=on_discard
                >
                    "Descartar"
                </button>
                <button
                    class="btn btn-primary"
                    id="confirmSaveBtn"
                    disabled=move || is_uploading.get()
                    on:click=on_save
                >
                    {move || if is_uploading.get() { "⏳ Enviando..." } else { "Guardar" }}
                </button>
            </div>

            <Show
                when=move || pending.get() == Some(PendingAction::Discard)
                fallback=|| view! {}
            >
                <ConfirmModal
                    title="Descartar archivos"
                    message="¿Está seguro de que desea descartar los archivos seleccionados?"
                    confirm_label="Descartar"
                    on_confirm=on_confirm_discard
                    on_cancel=on_cancel_pending
                />
            </Show>

            <Show
                when=move || pending.get() == Some(PendingAction::Save)
                fallback=|| view! {}
            >
                <ConfirmModal
                    title="Guardar archivos"
                    message="¿Desea guardar los archivos adjuntos seleccionados?"
                    confirm_label="Guardar"
                    on_confirm=on_confirm_save
                    on_cancel=on_cancel_pending
                />
            </Show>
        </div>
    }
}
