// Patio Tracker - Motorcycle yard tracking
// Module declarations

use tauri::Manager;

mod ble;
mod commands;
mod fleet;
mod patio;
mod validation;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            // Construct and load the fleet store once; mutations before the
            // load finished would otherwise clobber the persisted blob.
            let path = fleet::default_fleet_path()
                .map_err(|e| {
                    log::error!("Failed to resolve app data directory: {}", e);
                    e
                })
                .expect("Failed to resolve app data directory");

            let store = fleet::FleetStore::open(path);
            store.load();

            app.manage(store);

            // Simulated BLE signal, always back to "high" on launch
            app.manage(ble::SignalState::default());

            log::info!("Patio Tracker initialized successfully");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::register_moto,
            commands::update_moto,
            commands::remove_moto,
            commands::get_moto,
            commands::list_motos,
            commands::fleet_summary,
            commands::clear_motos,
            commands::status_options,
            commands::patio_map,
            commands::list_zonas,
            commands::get_rssi_level,
            commands::set_rssi_level,
            commands::suggested_zone,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
