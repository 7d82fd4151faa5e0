//! Host-form binding and multipart submission of the staged files.

use gloo_net::http::Request;
use gloo_utils::document;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement};

use crate::basket::{classify_response, SubmitOutcome};
use crate::config::{CSRF_FIELD, FILES_FIELD, HOST_FORM_ID, RECORD_FIELD, RECORD_INPUT_ID, TARGET_FIELD};
use crate::types::{AppError, AppResult, StagedFile};

/// One-shot typed binding to the hosting page's upload form.
///
/// The widget is mounted into a server-rendered page whose form carries
/// the upload URL in its `action` attribute and the CSRF token as a hidden
/// input. Locating the binding replaces per-handler null-checks: a missing
/// form or token aborts the submit with a visible error before any network
/// call.
#[derive(Clone, Debug)]
pub struct HostForm {
    /// Upload URL, taken from the form's `action` attribute.
    pub action: String,
    /// CSRF token value from the hidden `csrfmiddlewaretoken` input.
    pub csrf_token: String,
    /// Associated record id from `#id_evento`, empty when the page has none.
    pub record_id: String,
    /// Set when the page already started a redirect; suppresses the
    /// delayed basket reset after a successful save.
    pub redirecting: bool,
}

impl HostForm {
    pub fn locate() -> AppResult<Self> {
        let form = document()
            .get_element_by_id(HOST_FORM_ID)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
            .ok_or_else(|| {
                AppError::Config("Error interno: Formulario no encontrado.".to_string())
            })?;

        let csrf_token = form
            .query_selector(&format!("[name={}]", CSRF_FIELD))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                AppError::Config("Error de seguridad (token CSRF). Recargue.".to_string())
            })?;

        // El id del evento es opcional; el servidor tolera el campo vacío.
        let record_id = document()
            .get_element_by_id(RECORD_INPUT_ID)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();

        let redirecting = form.dataset().get("redirecting").as_deref() == Some("true");

        Ok(Self {
            action: form.action(),
            csrf_token,
            record_id,
            redirecting,
        })
    }
}

/// POST the basket as multipart/form-data to the host form's action URL.
///
/// The file field name repeats once per staged file, original file names
/// preserved. No custom headers beyond what the multipart body implies.
/// `Err` is a transport failure; server rejections come back as
/// [`SubmitOutcome::Rejected`].
pub async fn submit_attachments(
    host: &HostForm,
    target_id: &str,
    files: &[StagedFile],
) -> AppResult<SubmitOutcome> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Config(format!("No se pudo crear FormData: {:?}", e)))?;

    form_data
        .append_with_str(TARGET_FIELD, target_id)
        .map_err(|e| AppError::Config(format!("No se pudo añadir el director: {:?}", e)))?;

    for staged in files {
        form_data
            .append_with_blob_and_filename(FILES_FIELD, &staged.file, &staged.name)
            .map_err(|e| {
                AppError::Config(format!("No se pudo añadir '{}': {:?}", staged.name, e))
            })?;
    }

    form_data
        .append_with_str(RECORD_FIELD, &host.record_id)
        .map_err(|e| AppError::Config(format!("No se pudo añadir el id del evento: {:?}", e)))?;
    form_data
        .append_with_str(CSRF_FIELD, &host.csrf_token)
        .map_err(|e| AppError::Config(format!("No se pudo añadir el token: {:?}", e)))?;

    log::debug!(
        "POST {} con {}={}, {} archivo(s), {}='{}'",
        host.action,
        TARGET_FIELD,
        target_id,
        files.len(),
        RECORD_FIELD,
        host.record_id
    );
    log_form_entries(&form_data);

    let response = Request::post(&host.action)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("no se pudo construir la petición: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    let ok = response.ok();
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    Ok(classify_response(ok, status, &body))
}

/// Best-effort dump of the multipart entries to the console. Diagnostic
/// only, not part of the contract.
fn log_form_entries(form_data: &FormData) {
    let entries = form_data.entries();
    loop {
        let next = match entries.next() {
            Ok(next) => next,
            Err(_) => break,
        };
        if next.done() {
            break;
        }
        log::debug!("FormData entry: {:?}", next.value());
    }
}
