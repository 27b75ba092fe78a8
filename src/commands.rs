// Tauri IPC Commands
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tauri::State;
use uuid::Uuid;

use crate::ble::{self, RssiLevel, SignalState};
use crate::fleet::{FleetStore, FleetSummary, Moto, MotoPatch, STATUS_OPTIONS};
use crate::patio::{self, ZoneOccupancy};
use crate::validation;

#[derive(Debug, Serialize)]
pub struct CommandError {
    message: String,
}

impl<E: std::fmt::Display> From<E> for CommandError {
    fn from(error: E) -> Self {
        CommandError {
            message: error.to_string(),
        }
    }
}

type CommandResult<T> = Result<T, CommandError>;

// ==================== FLEET COMMANDS ====================

#[derive(Debug, Deserialize)]
pub struct RegisterMotoInput {
    pub placa: String,
    pub zona: String,
    pub status: String,
    pub observacoes: Option<String>,
}

#[tauri::command]
pub fn register_moto(
    store: State<'_, FleetStore>,
    input: RegisterMotoInput,
) -> CommandResult<Moto> {
    validation::validate_registration(&input.placa, &input.zona)
        .map_err(|e| CommandError::from(e))?;

    // Ids are generated here, never taken from the caller, so uniqueness
    // holds by construction.
    let moto = Moto {
        id: Uuid::new_v4().to_string(),
        placa: input.placa,
        zona: input.zona,
        status: input.status,
        observacoes: input.observacoes,
        data_registro: Some(Utc::now().to_rfc3339()),
        data_atualizacao: None,
    };

    store.add(moto.clone()).map_err(|e| CommandError::from(e))?;

    log::info!("Registered moto {} in zone {}", moto.placa, moto.zona);
    Ok(moto)
}

#[tauri::command]
pub fn update_moto(store: State<'_, FleetStore>, input: MotoPatch) -> CommandResult<Moto> {
    if let Some(ref placa) = input.placa {
        validation::validate_placa(placa).map_err(|e| CommandError::from(e))?;
    }
    if let Some(ref zona) = input.zona {
        validation::validate_zona(zona).map_err(|e| CommandError::from(e))?;
    }

    store.update(input).ok_or_else(|| CommandError {
        message: "Moto não encontrada".to_string(),
    })
}

#[tauri::command]
pub fn remove_moto(store: State<'_, FleetStore>, id: String) -> CommandResult<()> {
    store.remove(&id);
    Ok(())
}

#[tauri::command]
pub fn get_moto(store: State<'_, FleetStore>, id: String) -> CommandResult<Option<Moto>> {
    Ok(store.get(&id))
}

#[tauri::command]
pub fn list_motos(store: State<'_, FleetStore>) -> CommandResult<Vec<Moto>> {
    Ok(store.all())
}

#[tauri::command]
pub fn fleet_summary(store: State<'_, FleetStore>) -> CommandResult<FleetSummary> {
    Ok(store.summary())
}

/// Settings screen "Limpar Dados": wipe every record.
#[tauri::command]
pub fn clear_motos(store: State<'_, FleetStore>) -> CommandResult<()> {
    store.clear();
    log::info!("Fleet cleared");
    Ok(())
}

#[tauri::command]
pub fn status_options() -> CommandResult<Vec<String>> {
    Ok(STATUS_OPTIONS.iter().map(|s| s.to_string()).collect())
}

// ==================== PATIO MAP COMMANDS ====================

#[tauri::command]
pub fn patio_map(store: State<'_, FleetStore>) -> CommandResult<Vec<ZoneOccupancy>> {
    Ok(patio::build_map(&store.all()))
}

#[tauri::command]
pub fn list_zonas() -> CommandResult<Vec<String>> {
    Ok(patio::ZONES.iter().map(|z| z.to_string()).collect())
}

// ==================== BLE SIGNAL COMMANDS ====================

#[tauri::command]
pub fn get_rssi_level(signal: State<'_, SignalState>) -> CommandResult<RssiLevel> {
    Ok(signal.get())
}

#[tauri::command]
pub fn set_rssi_level(signal: State<'_, SignalState>, level: String) -> CommandResult<RssiLevel> {
    let level = RssiLevel::from_string(&level);
    signal.set(level);
    log::info!("Simulated BLE signal set to {}", level.to_string());
    Ok(level)
}

/// Zone the tracked device is closest to at the current signal level, or
/// `None` when there is no signal.
#[tauri::command]
pub fn suggested_zone(signal: State<'_, SignalState>) -> CommandResult<Option<String>> {
    Ok(ble::suggested_zone(signal.get()).map(|z| z.to_string()))
}
