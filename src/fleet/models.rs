// Data models for the moto fleet
use serde::{Deserialize, Serialize};

/// Conventional status values offered by the registration UI. The store
/// itself treats `status` as free-form text.
pub const STATUS_OPTIONS: [&str; 3] = ["Ativa", "Inativa", "Em Manutenção"];

pub const STATUS_ATIVA: &str = "Ativa";

/// A tracked motorcycle. Serialized with camelCase keys so the stored JSON
/// blob stays byte-compatible with payloads written by earlier app versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moto {
    pub id: String,
    pub placa: String,
    pub zona: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_registro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_atualizacao: Option<String>,
}

/// Partial update for an existing moto. Fields left as `None` keep their
/// stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotoPatch {
    pub id: String,
    pub placa: Option<String>,
    pub zona: Option<String>,
    pub status: Option<String>,
    pub observacoes: Option<String>,
}

/// Counts shown on the home screen stat cards.
#[derive(Debug, Clone, Serialize)]
pub struct FleetSummary {
    pub total: usize,
    pub ativas: usize,
}
