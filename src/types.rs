//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::basket::FileKind;

// =============================================================================
// API Types
// =============================================================================

/// A program director record from the directors endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Director {
    /// Identity document number, used as the selection value.
    pub id: String,
    /// Full display name.
    pub nombre: String,
}

/// Load state of the target-selection control.
///
/// The control degrades to a disabled, labeled placeholder instead of
/// failing the page when the list is empty or the fetch errors out.
#[derive(Clone, Debug, PartialEq)]
pub enum DirectorsState {
    Loading,
    Ready(Vec<Director>),
    Empty,
    Failed,
}

impl DirectorsState {
    /// Label of the sentinel (first) option.
    pub fn placeholder(&self) -> &'static str {
        match self {
            DirectorsState::Loading | DirectorsState::Ready(_) => "Seleccionar...",
            DirectorsState::Empty => "No hay directores",
            DirectorsState::Failed => "Error al cargar",
        }
    }

    /// Whether the control accepts user input.
    pub fn is_ready(&self) -> bool {
        matches!(self, DirectorsState::Ready(_))
    }

    pub fn options(&self) -> Vec<Director> {
        match self {
            DirectorsState::Ready(list) => list.clone(),
            _ => Vec::new(),
        }
    }
}

// =============================================================================
// Basket Types
// =============================================================================

/// A file staged in the basket, with its classification cached at intake.
#[derive(Clone, Debug)]
pub struct StagedFile {
    /// The browser-held blob.
    pub file: web_sys::File,
    /// Original file name, preserved for the multipart part.
    pub name: String,
    /// Classification by declared MIME type.
    pub kind: FileKind,
}

impl StagedFile {
    pub fn new(file: web_sys::File) -> Self {
        let name = file.name();
        let kind = FileKind::from_mime(&file.type_());
        Self { file, name, kind }
    }
}

/// Action awaiting explicit user confirmation in a modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingAction {
    Discard,
    Save,
}

// =============================================================================
// Notification Types
// =============================================================================

/// A user-facing notification shown in the shared modal surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Error(String),
    Success(String),
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. Validation and
/// configuration variants carry the exact user-facing message.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Precondition not met (no target, no files, quota exceeded).
    Validation(String),
    /// Required DOM element or security token missing.
    Config(String),
    /// Network/HTTP transport error.
    Network(String),
    /// Server answered with an error status.
    Server(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) | AppError::Config(msg) => write!(f, "{}", msg),
            AppError::Network(msg) => write!(f, "Error de red: {}", msg),
            AppError::Server(msg) => write!(f, "Error del servidor: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
