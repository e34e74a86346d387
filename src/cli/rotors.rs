use crate::catalog::{Category, CATALOG};

/// Describe every rotor and reflector in the catalog.
pub fn show_rotors() -> String {
    let mut output = String::new();

    output.push_str("Enigma Rotor Catalog\n");
    output.push_str("====================\n\n");

    output.push_str("Rotors:\n");
    for kind in CATALOG.iter().filter(|t| t.category() == Category::Rotor) {
        let notches: Vec<String> = kind
            .notches
            .iter()
            .map(|&b| (b as char).to_string())
            .collect();
        output.push_str(&format!(
            "  {:<5} {}  notch {}\n",
            kind.name,
            String::from_utf8_lossy(kind.forward),
            notches.join(",")
        ));
    }
    output.push('\n');

    output.push_str("Reflectors:\n");
    for kind in CATALOG.iter().filter(|t| t.category() == Category::Reflector) {
        output.push_str(&format!(
            "  {:<5} {}\n",
            kind.name,
            String::from_utf8_lossy(kind.forward)
        ));
    }

    output
}
