//! Configuration commands: list radios, add a radio

use crate::domain::RadioProfile;
use crate::state::AppState;

/// One line per radio, in configuration order
pub fn list_radios(state: &AppState) -> Vec<String> {
    state
        .profiles
        .radios()
        .iter()
        .map(|r| format!("{:<16} {:<7} {}", r.rig_id, r.conn_type.to_string(), r.target()))
        .collect()
}

/// Append a radio to the configuration and save it.
///
/// The id is stored exactly as typed, so one that is empty, padded with
/// whitespace, or already taken is refused rather than rewritten.
pub fn add_radio(state: &mut AppState, profile: RadioProfile) -> Result<(), String> {
    let rig_id = profile.rig_id.clone();
    if rig_id.trim().is_empty() {
        return Err("Rig ID cannot be empty".to_string());
    }
    if rig_id.trim() != rig_id {
        return Err(format!("Rig ID '{rig_id}' has leading or trailing whitespace"));
    }
    if state.profiles.find(&rig_id).is_some() {
        return Err(format!("Rig ID '{rig_id}' already exists"));
    }

    state
        .store
        .append_and_save(&mut state.profiles, profile)
        .map_err(|e| e.to_string())?;
    log::info!(
        "Added radio '{rig_id}', saved to {}",
        state.store.path().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProfileCollection;
    use crate::state::Settings;
    use crate::store::ConfigStore;
    use tempfile::TempDir;

    fn state_in(dir: &TempDir) -> AppState {
        let settings = Settings {
            config_path: dir.path().join("config.json"),
            timeout: None,
            dry_run: true,
            rigctl_program: "rigctl".into(),
        };
        let store = ConfigStore::new(&settings.config_path);
        AppState::with_profiles(store, ProfileCollection::default(), &settings)
    }

    #[test]
    fn add_radio_persists_and_lists() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);

        add_radio(&mut state, RadioProfile::tcp("TS-890S", "192.168.1.50", "60000")).unwrap();
        add_radio(&mut state, RadioProfile::serial("FT-991A", "/dev/ttyUSB0", 38400)).unwrap();

        let lines = list_radios(&state);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("TS-890S"));
        assert!(lines[0].contains("192.168.1.50:60000"));
        assert!(lines[1].contains("/dev/ttyUSB0 @ 38400 baud"));

        let reloaded = state.store.load().unwrap();
        assert_eq!(reloaded, state.profiles);
    }

    #[test]
    fn add_radio_rejects_duplicate_id() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        add_radio(&mut state, RadioProfile::rigctl("Dummy", None, None)).unwrap();
        let err = add_radio(&mut state, RadioProfile::rigctl("Dummy", Some(2), None)).unwrap_err();
        assert!(err.contains("already exists"), "{err}");
        assert_eq!(state.store.load().unwrap().len(), 1);
    }

    #[test]
    fn add_radio_refuses_blank_or_padded_id_without_saving() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);

        let err = add_radio(&mut state, RadioProfile::tcp("   ", "h", "1")).unwrap_err();
        assert!(err.contains("cannot be empty"), "{err}");
        let err = add_radio(&mut state, RadioProfile::tcp(" R1 ", "h", "1")).unwrap_err();
        assert!(err.contains("whitespace"), "{err}");

        assert!(state.profiles.is_empty());
        assert!(!state.store.path().exists());
    }
}
