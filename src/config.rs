//! Application configuration.
//!
//! Centralized constants for the attachment upload frontend. The element
//! ids and field names must match the hosting page's markup and the
//! server's multipart contract.

/// Endpoint returning the program director list as `[{id, nombre}]`.
pub const DIRECTORS_URL: &str = "/attachGeneric/obtener-directores/";

/// Id of the hosting form. Its `action` attribute is the upload URL and it
/// carries the CSRF token input.
pub const HOST_FORM_ID: &str = "formSubidaArchivos";

/// Id of the hidden file input backing the drop zone and picker buttons.
pub const FILE_INPUT_ID: &str = "fileInput";

/// Id of the hidden input holding the associated record (event) id.
pub const RECORD_INPUT_ID: &str = "id_evento";

/// Multipart field name for the target selection.
pub const TARGET_FIELD: &str = "directorPrograma";

/// Multipart field name repeated once per attached file.
pub const FILES_FIELD: &str = "archivos";

/// Multipart field name for the associated record id.
pub const RECORD_FIELD: &str = "id_evento";

/// Multipart field name for the CSRF token.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Maximum number of PDF files the basket may hold.
pub const MAX_PDF_FILES: usize = 4;

/// Maximum number of ZIP files the basket may hold (exclusive with PDFs).
pub const MAX_ZIP_FILES: usize = 1;

/// Hard cap on the displayed file name, ellipsis appended beyond this.
pub const MAX_DISPLAY_NAME: usize = 12;

/// Delay before the basket auto-resets after a successful save (ms).
pub const AUTO_RESET_DELAY_MS: u32 = 3_000;
