//! Basket rules: file classification, admission policy, confirmation
//! gates and server-response classification.
//!
//! Everything here is plain data in, plain data out. The components own
//! the actual `web_sys::File` handles and the signals; this module only
//! decides what is allowed, in what order, and with which message. That
//! keeps the business rules testable without a browser.

use crate::config::{MAX_DISPLAY_NAME, MAX_PDF_FILES, MAX_ZIP_FILES};

/// Single notification raised for a batch containing rejected candidates.
pub const MSG_QUOTA: &str = "Solo se permiten hasta 4 archivos PDF o 1 archivo ZIP.";

/// Raised when an action requires a target selection and none is set.
pub const MSG_SELECT_DIRECTOR: &str = "Por favor, seleccione un director de programa.";

/// Raised when a submit is attempted with an empty basket.
pub const MSG_SELECT_FILE: &str = "Por favor, seleccione al menos un archivo.";

/// Raised when a 2xx body matches neither the success nor the error shape.
pub const MSG_UNEXPECTED: &str = "Respuesta inesperada del servidor.";

// =============================================================================
// Classification
// =============================================================================

/// File classification by declared MIME type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Zip,
    Other,
}

impl FileKind {
    /// Classify a browser-declared MIME type. Browsers report zip archives
    /// under two different types depending on platform.
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "application/pdf" => FileKind::Pdf,
            "application/zip" | "application/x-zip-compressed" => FileKind::Zip,
            _ => FileKind::Other,
        }
    }

    /// Icon classes for the preview block.
    pub fn icon_class(&self) -> &'static str {
        match self {
            FileKind::Pdf => "fas fa-3x fa-file-pdf",
            FileKind::Zip => "fas fa-3x fa-file-archive",
            FileKind::Other => "fas fa-3x fa-file",
        }
    }
}

// =============================================================================
// Admission policy
// =============================================================================

/// Per-kind tallies of the current basket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BasketCounts {
    pub pdf: usize,
    pub zip: usize,
    pub total: usize,
}

impl BasketCounts {
    pub fn from_kinds<I: IntoIterator<Item = FileKind>>(kinds: I) -> Self {
        let mut counts = Self::default();
        for kind in kinds {
            counts.push(kind);
        }
        counts
    }

    /// Whether a candidate of `kind` may enter the basket as it stands.
    ///
    /// The basket holds either up to 4 PDFs or exactly 1 ZIP, never a mix.
    /// The ZIP branch additionally requires an empty basket, so a ZIP can
    /// never join any other file regardless of its kind.
    pub fn admits(&self, kind: FileKind) -> bool {
        match kind {
            FileKind::Pdf => self.pdf < MAX_PDF_FILES && self.zip == 0,
            FileKind::Zip => self.zip < MAX_ZIP_FILES && self.pdf == 0 && self.total == 0,
            FileKind::Other => false,
        }
    }

    pub fn push(&mut self, kind: FileKind) {
        match kind {
            FileKind::Pdf => self.pdf += 1,
            FileKind::Zip => self.zip += 1,
            FileKind::Other => {}
        }
        self.total += 1;
    }
}

/// Outcome of planning one intake batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntakePlan {
    /// Indices into the candidate batch, in encounter order.
    pub admitted: Vec<usize>,
    /// True when at least one candidate was rejected. One notification per
    /// batch, however many candidates fell out.
    pub rejected: bool,
}

/// Apply the admission policy to a candidate batch against the current
/// basket tallies. Admitted candidates count against later ones in the
/// same batch.
pub fn plan_intake(kinds: &[FileKind], mut counts: BasketCounts) -> IntakePlan {
    let mut plan = IntakePlan::default();
    for (idx, kind) in kinds.iter().copied().enumerate() {
        if counts.admits(kind) {
            counts.push(kind);
            plan.admitted.push(idx);
        } else {
            plan.rejected = true;
        }
    }
    plan
}

// =============================================================================
// Confirmation gates
// =============================================================================

/// Failed submit precondition. Target-missing takes precedence when both
/// apply, at the initial gate and again at the final pre-send check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateError {
    NoTarget,
    NoFiles,
}

impl GateError {
    pub fn message(&self) -> &'static str {
        match self {
            GateError::NoTarget => MSG_SELECT_DIRECTOR,
            GateError::NoFiles => MSG_SELECT_FILE,
        }
    }
}

/// Preconditions for opening the save confirmation and for the final
/// pre-send re-validation.
pub fn submit_gate(file_count: usize, target_selected: bool) -> Result<(), GateError> {
    if !target_selected {
        Err(GateError::NoTarget)
    } else if file_count == 0 {
        Err(GateError::NoFiles)
    } else {
        Ok(())
    }
}

/// Discard gate outcome. An empty basket with a target selected is a
/// silent no-op, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscardGate {
    Proceed,
    NoTarget,
    Ignore,
}

pub fn discard_gate(file_count: usize, target_selected: bool) -> DiscardGate {
    if !target_selected {
        DiscardGate::NoTarget
    } else if file_count > 0 {
        DiscardGate::Proceed
    } else {
        DiscardGate::Ignore
    }
}

// =============================================================================
// Response classification
// =============================================================================

/// Result of a submit attempt, as the user should see it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server answered 2xx with a `mensaje` field.
    Saved(String),
    /// Everything else, carrying the message for the error surface.
    Rejected(String),
}

/// Classify the upload response from its status and raw body text.
///
/// Non-2xx bodies are still tried as structured `{error}` JSON so the
/// server's own message wins over a synthesized one. A 2xx body with an
/// `error` field is an application-level failure.
pub fn classify_response(ok: bool, status: u16, body: &str) -> SubmitOutcome {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let error_field = parsed
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(|e| e.as_str())
        .map(str::to_string);

    if !ok {
        return SubmitOutcome::Rejected(error_field.unwrap_or_else(|| {
            format!("Error del servidor: {}. Respuesta no fue JSON.", status)
        }));
    }
    if let Some(msg) = error_field {
        return SubmitOutcome::Rejected(msg);
    }
    match parsed
        .as_ref()
        .and_then(|v| v.get("mensaje"))
        .and_then(|m| m.as_str())
    {
        Some(msg) => SubmitOutcome::Saved(msg.to_string()),
        None => SubmitOutcome::Rejected(MSG_UNEXPECTED.to_string()),
    }
}

/// Whether the delayed basket reset should run after a successful save.
/// Skipped when the hosting page already started a redirect.
pub fn should_auto_reset(redirecting: bool) -> bool {
    !redirecting
}

// =============================================================================
// Display helpers
// =============================================================================

/// Truncate a file name for the preview block, ellipsis appended.
pub fn truncate_display_name(name: &str) -> String {
    if name.chars().count() > MAX_DISPLAY_NAME {
        let head: String = name.chars().take(MAX_DISPLAY_NAME).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PDF: &str = "application/pdf";
    const ZIP: &str = "application/zip";

    fn kinds(mimes: &[&str]) -> Vec<FileKind> {
        mimes.iter().map(|m| FileKind::from_mime(m)).collect()
    }

    #[test]
    fn classifies_both_zip_mime_types() {
        assert_eq!(FileKind::from_mime(ZIP), FileKind::Zip);
        assert_eq!(
            FileKind::from_mime("application/x-zip-compressed"),
            FileKind::Zip
        );
        assert_eq!(FileKind::from_mime(PDF), FileKind::Pdf);
        assert_eq!(FileKind::from_mime("image/png"), FileKind::Other);
    }

    #[test]
    fn admits_at_most_four_pdfs_with_one_rejection_per_batch() {
        let plan = plan_intake(&kinds(&[PDF, PDF, PDF, PDF, PDF]), BasketCounts::default());
        assert_eq!(plan.admitted, vec![0, 1, 2, 3]);
        assert!(plan.rejected);
    }

    #[test]
    fn zip_rejected_when_basket_holds_a_pdf() {
        let counts = BasketCounts::from_kinds(kinds(&[PDF]));
        let plan = plan_intake(&kinds(&[ZIP]), counts);
        assert!(plan.admitted.is_empty());
        assert!(plan.rejected);
    }

    #[test]
    fn pdf_rejected_when_basket_holds_a_zip() {
        let counts = BasketCounts::from_kinds(kinds(&[ZIP]));
        let plan = plan_intake(&kinds(&[PDF]), counts);
        assert!(plan.admitted.is_empty());
        assert!(plan.rejected);
    }

    #[test]
    fn second_zip_rejected() {
        let counts = BasketCounts::from_kinds(kinds(&[ZIP]));
        let plan = plan_intake(&kinds(&[ZIP]), counts);
        assert!(plan.admitted.is_empty());
        assert!(plan.rejected);
    }

    #[test]
    fn mixed_batch_never_violates_the_invariant() {
        // zip first wins the empty basket, everything after falls out
        let plan = plan_intake(&kinds(&[ZIP, PDF, PDF]), BasketCounts::default());
        assert_eq!(plan.admitted, vec![0]);
        assert!(plan.rejected);

        // pdf first blocks the zip, later pdfs still enter
        let plan = plan_intake(&kinds(&[PDF, ZIP, PDF]), BasketCounts::default());
        assert_eq!(plan.admitted, vec![0, 2]);
        assert!(plan.rejected);
    }

    #[test]
    fn other_kinds_never_admitted() {
        let plan = plan_intake(&kinds(&["image/png", "text/plain"]), BasketCounts::default());
        assert!(plan.admitted.is_empty());
        assert!(plan.rejected);
    }

    #[test]
    fn submit_gate_requires_target_before_files() {
        assert_eq!(submit_gate(0, false), Err(GateError::NoTarget));
        assert_eq!(submit_gate(3, false), Err(GateError::NoTarget));
        assert_eq!(submit_gate(0, true), Err(GateError::NoFiles));
        assert_eq!(submit_gate(1, true), Ok(()));
        assert_eq!(GateError::NoTarget.message(), MSG_SELECT_DIRECTOR);
        assert_eq!(GateError::NoFiles.message(), MSG_SELECT_FILE);
    }

    #[test]
    fn discard_gate_ignores_empty_basket_with_target_set() {
        assert_eq!(discard_gate(0, true), DiscardGate::Ignore);
        assert_eq!(discard_gate(2, true), DiscardGate::Proceed);
        assert_eq!(discard_gate(2, false), DiscardGate::NoTarget);
        assert_eq!(discard_gate(0, false), DiscardGate::NoTarget);
    }

    #[test]
    fn non_ok_with_structured_error_surfaces_it_verbatim() {
        let outcome = classify_response(false, 400, r#"{"error": "X"}"#);
        assert_eq!(outcome, SubmitOutcome::Rejected("X".to_string()));
    }

    #[test]
    fn non_ok_without_json_synthesizes_status_message() {
        let outcome = classify_response(false, 500, "<html>stack trace</html>");
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(
                "Error del servidor: 500. Respuesta no fue JSON.".to_string()
            )
        );
    }

    #[test]
    fn ok_with_error_field_is_an_application_failure() {
        let outcome = classify_response(true, 200, r#"{"error": "duplicado"}"#);
        assert_eq!(outcome, SubmitOutcome::Rejected("duplicado".to_string()));
    }

    #[test]
    fn ok_with_mensaje_is_success() {
        let outcome = classify_response(true, 200, r#"{"mensaje": "Archivos guardados."}"#);
        assert_eq!(
            outcome,
            SubmitOutcome::Saved("Archivos guardados.".to_string())
        );
    }

    #[test]
    fn ok_with_unknown_shape_is_unexpected() {
        assert_eq!(
            classify_response(true, 200, r#"{"status": "?"}"#),
            SubmitOutcome::Rejected(MSG_UNEXPECTED.to_string())
        );
        assert_eq!(
            classify_response(true, 200, "not json"),
            SubmitOutcome::Rejected(MSG_UNEXPECTED.to_string())
        );
    }

    #[test]
    fn auto_reset_skipped_while_redirecting() {
        assert!(should_auto_reset(false));
        assert!(!should_auto_reset(true));
    }

    #[test]
    fn truncates_long_names_at_twelve_chars() {
        assert_eq!(truncate_display_name("corto.pdf"), "corto.pdf");
        assert_eq!(truncate_display_name("exactamente1"), "exactamente1");
        assert_eq!(
            truncate_display_name("informe_final_2025.pdf"),
            "informe_fina..."
        );
    }
}
