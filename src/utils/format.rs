const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

/// Formate une taille de fichier en unités décimales (1 KB = 1000 octets).
///
/// Les KB sont arrondis à l'unité, les MB à une décimale et les unités
/// supérieures à deux décimales.
pub fn format_file_size(bytes: u64) -> String {
    match bytes {
        0 => return "Zero KB".to_string(),
        1 => return "1 byte".to_string(),
        2..=999 => return format!("{bytes} bytes"),
        _ => {}
    }

    let mut value = bytes as f64 / 1000.0;
    let mut unit = 0;
    while value >= 999.5 && unit + 1 < UNITS.len() {
        value /= 1000.0;
        unit += 1;
    }

    match unit {
        0 => format!("{value:.0} {}", UNITS[unit]),
        1 => format!("{value:.1} {}", UNITS[unit]),
        _ => format!("{value:.2} {}", UNITS[unit]),
    }
}
