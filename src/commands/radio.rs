//! Radio control commands

use crate::state::AppState;

/// Push a frequency to the selected radio and describe what came back.
///
/// A transport failure comes back as `Err` with the message; it never
/// panics, whatever state the radio is in.
pub fn set_frequency(state: &AppState, rig_id: &str, frequency: &str) -> Result<String, String> {
    state
        .dispatcher
        .dispatch(&state.profiles, rig_id, frequency)
        .map(|resp| resp.to_string())
        .map_err(|e| e.to_string())
}
