//! Console Alert Rendering
//!
//! Two line formats, one per verdict. ANSI escapes work in most terminals.

pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_GREEN: &str = "\x1b[92m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_BOLD: &str = "\x1b[1m";

/// Render one alert line. Anomalies get the high-visibility treatment;
/// normal readings a subtle marker. Values are always shown to 2 decimals.
pub fn render(anomalous: bool, temperature: f64, vibration: f64) -> String {
    if anomalous {
        format!(
            "{}{}🚨 [ALERT] ANOMALY DETECTED! Machine failure imminent! \
             Temp: {:.2}°C, Vib: {:.2} mm/s 🚨{}",
            COLOR_RED, COLOR_BOLD, temperature, vibration, COLOR_RESET
        )
    } else {
        format!(
            "{}[NORMAL]{} Temp: {:.2}°C, Vib: {:.2} mm/s",
            COLOR_GREEN, COLOR_RESET, temperature, vibration
        )
    }
}
