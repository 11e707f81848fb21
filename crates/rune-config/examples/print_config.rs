/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    // Load configuration from rune.toml
    let config = rune_config::RuneConfig::load();

    println!("=== Rune Shaping Configuration ===\n");

    println!("Shaping Settings:");
    println!("  Embolden Strength: {}", config.shaping.embolden_strength);
    println!("  Slant: {}", config.shaping.slant);
    println!("  Emit Path Commands: {}", config.shaping.emit_path_commands);
    println!();

    println!("Fonts:");
    for (index, face) in config.fonts.faces.iter().enumerate() {
        println!("  [{}] {} (face {})", index, face.path.display(), face.index);
    }
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
