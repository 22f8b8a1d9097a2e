//! Terminal renderer: ascii art beside the labeled panel rows

use crate::config::{Config, ConfigEntry};
use crate::data::AboutInfo;
use crate::utils::command::run_command;
use std::fs;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const DEFAULT_ASCII: &str = include_str!("../ascii/synos.txt");
const RESET: &str = "\x1b[0m";

pub fn hex_to_ansi(color: &str) -> String {
    if let Some(code) = named_color_code(color) {
        return code.to_string();
    }

    if color.starts_with('#') && color.len() == 7 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&color[1..3], 16),
            u8::from_str_radix(&color[3..5], 16),
            u8::from_str_radix(&color[5..7], 16),
        ) {
            return format!("\x1b[38;2;{};{};{}m", r, g, b);
        }
    }

    RESET.to_string()
}

fn named_color_code(name: &str) -> Option<&'static str> {
    let code = match name.to_lowercase().as_str() {
        "black" => "\x1b[30m",
        "red" => "\x1b[31m",
        "green" => "\x1b[32m",
        "yellow" => "\x1b[33m",
        "blue" => "\x1b[34m",
        "magenta" => "\x1b[35m",
        "cyan" => "\x1b[36m",
        "white" => "\x1b[37m",
        "bright_black" | "gray" | "grey" => "\x1b[90m",
        "bright_red" => "\x1b[91m",
        "bright_green" => "\x1b[92m",
        "bright_yellow" => "\x1b[93m",
        "bright_blue" => "\x1b[94m",
        "bright_magenta" => "\x1b[95m",
        "bright_cyan" => "\x1b[96m",
        "bright_white" => "\x1b[97m",
        "reset" | "default" => RESET,
        _ => return None,
    };
    Some(code)
}

/// Resolve a color reference: a name from the `[colors]` table, a named
/// ANSI color, or a raw hex value.
fn resolve_color(config: &Config, name: Option<&str>) -> String {
    let Some(name) = name else {
        return RESET.to_string();
    };
    match config.colors.get(name) {
        Some(value) => hex_to_ansi(value),
        None => hex_to_ansi(name),
    }
}

pub fn load_ascii_lines(config: &Config) -> Vec<String> {
    let use_default = config.display.use_default_ascii.unwrap_or(true);

    if let Some(path) = config
        .display
        .ascii_path
        .as_ref()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
    {
        let expanded = shellexpand::tilde(path).to_string();
        if Path::new(&expanded).exists() {
            if let Ok(contents) = fs::read_to_string(&expanded) {
                return contents.lines().map(String::from).collect();
            }
        }
    }

    if use_default {
        return DEFAULT_ASCII.lines().map(String::from).collect();
    }
    vec![]
}

pub fn render_output(config: &Config, info: &AboutInfo) {
    let separator = config
        .display
        .separator
        .clone()
        .unwrap_or_else(|| ": ".to_string());
    let ascii_lines = load_ascii_lines(config);
    let max_ascii_width = ascii_lines
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0);
    let ascii_color = resolve_color(config, Some(&config.display.ascii_color));

    for (i, entry) in config.display.items.iter().enumerate() {
        let ascii_line = ascii_lines.get(i).map(String::as_str).unwrap_or("");
        let padded_ascii = format!("{:<width$}", ascii_line, width = max_ascii_width);
        let colored_ascii = format!("{}{}", ascii_color, padded_ascii);

        if entry.value.is_empty() {
            println!("{}{}", colored_ascii, RESET);
            continue;
        }

        let output_value = get_output_value(entry, info);

        if entry.key.is_empty() {
            // Keyless rows (title, version line, free text) take the entry color
            let value_color = resolve_color(
                config,
                entry.value_color.as_deref().or(entry.color.as_deref()),
            );
            println!("{}  {}{}{}", colored_ascii, value_color, output_value, RESET);
        } else {
            let key_color = resolve_color(config, entry.color.as_deref());
            let value_color = resolve_color(config, entry.value_color.as_deref());
            println!(
                "{}  {}{}{}{}{}{}{}",
                colored_ascii,
                key_color,
                entry.key,
                RESET,
                separator,
                value_color,
                output_value,
                RESET
            );
        }
    }

    // Art taller than the item list still prints in full
    for line in ascii_lines.iter().skip(config.display.items.len()) {
        let padded = format!("{:<width$}", line, width = max_ascii_width);
        println!("{}{}{}", ascii_color, padded, RESET);
    }
}

fn get_output_value(entry: &ConfigEntry, info: &AboutInfo) -> String {
    match entry.r#type.as_str() {
        "default" => match entry.value.as_str() {
            "os_name" => info.os.name.clone(),
            "version" => format!("Version {}", info.os.short_version),
            "os_version" => info.os.version.clone(),
            "processor" => info.processor.summary.clone(),
            "memory" => info.memory.summary.clone(),
            "graphics" => info.graphics.summary.clone(),
            "startup_disk" => info.disk.summary.clone(),
            _ => "Unknown default value".to_string(),
        },
        "text" => entry.value.clone(),
        "command" => run_command("sh", &["-c", &entry.value])
            .unwrap_or_else(|_| "Command failed".to_string()),
        _ => "Invalid type".to_string(),
    }
}
