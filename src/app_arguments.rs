// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::color_mode::{ColorMode, ALL_COLOR_MODES};
use crate::color_utils::parse_color;
use crate::indicator::IndicatorMode;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppArguments {
    pub custom_config_path: Option<String>,
    pub color_mode: Option<ColorMode>,
    pub indicator_mode: Option<IndicatorMode>,
    pub initial_color: Option<u32>,
    pub show_text_indicator: bool,
    pub channel_values: Vec<(String, i32)>,
    // help or version text, nothing else should be done
    pub info_message: Option<String>,
    pub read_error: Option<String>,
}

struct ArgumentDefinition {
    name: &'static str,
    syntax: &'static str,
    description: &'static str,
    number_of_args: usize,
}

const SUPPORTED_ARGS: &[ArgumentDefinition] = &[
    ArgumentDefinition {
        name: "--help",
        syntax: "--help",
        description: "Show this help",
        number_of_args: 0,
    },
    ArgumentDefinition {
        name: "--version",
        syntax: "--version",
        description: "Show the application version",
        number_of_args: 0,
    },
    ArgumentDefinition {
        name: "--config-path",
        syntax: "--config-path <path>",
        description: "Set custom path to the config file",
        number_of_args: 1,
    },
    ArgumentDefinition {
        name: "--mode",
        syntax: "--mode <mode>",
        description: "Color mode: rgb, argb, hsv, ahsv, hsl, cmyk or cmyk255",
        number_of_args: 1,
    },
    ArgumentDefinition {
        name: "--indicator",
        syntax: "--indicator <decimal|hex>",
        description: "Format of the text indicator",
        number_of_args: 1,
    },
    ArgumentDefinition {
        name: "--color",
        syntax: "--color <#RRGGBB|#AARRGGBB>",
        description: "Initial color",
        number_of_args: 1,
    },
    ArgumentDefinition {
        name: "--show-indicator",
        syntax: "--show-indicator",
        description: "Show the text indicator",
        number_of_args: 0,
    },
    ArgumentDefinition {
        name: "--set",
        syntax: "--set <channel> <value>",
        description: "Move a channel slider, can be repeated",
        number_of_args: 2,
    },
];

fn arguments_with_error(message: String) -> AppArguments {
    AppArguments {
        read_error: Some(message),
        ..Default::default()
    }
}

fn arguments_with_info(message: String) -> AppArguments {
    AppArguments {
        info_message: Some(message),
        ..Default::default()
    }
}

fn get_help_text() -> String {
    let max_syntax_len = SUPPORTED_ARGS
        .iter()
        .map(|arg| arg.syntax.len())
        .max()
        .unwrap_or(0);

    let mut help_text = "Supported arguments:\n".to_string();
    for arg in SUPPORTED_ARGS {
        help_text.push_str(&format!(
            "{:width$} {}\n",
            arg.syntax,
            arg.description,
            width = max_syntax_len
        ));
    }
    help_text.push('\n');
    let mode_names: Vec<&str> = ALL_COLOR_MODES.iter().map(ColorMode::name).collect();
    help_text.push_str(&format!("Color modes: {}\n", mode_names.join(", ")));
    help_text.push_str("Example: coloromatic --mode hsv --color #FF0000FF --set H 120 --show-indicator");
    return help_text;
}

pub fn get_app_arguments() -> AppArguments {
    let args: Vec<String> = std::env::args().collect();
    parse_app_arguments(&args)
}

/// `args[0]` is the executable name
pub fn parse_app_arguments(args: &[String]) -> AppArguments {
    let mut result = AppArguments::default();

    let mut i: usize = 1;
    while i < args.len() {
        let arg = &args[i];

        let found_arg = if arg.starts_with("--") {
            SUPPORTED_ARGS
                .iter()
                .find(|supported_arg| supported_arg.name == arg)
        } else {
            None
        };

        let Some(found_arg) = found_arg else {
            return arguments_with_error(format!(
                "Unknown argument: {}\nUse --help to see the list of supported arguments",
                arg
            ));
        };

        if i + found_arg.number_of_args >= args.len() {
            return arguments_with_error(format!(
                "Not enough arguments for {}\nUse --help to see the list of supported arguments",
                arg
            ));
        }

        let value = args.get(i + 1).map(String::as_str).unwrap_or_default();
        match found_arg.name {
            "--help" => return arguments_with_info(get_help_text()),
            "--version" => return arguments_with_info(env!("CARGO_PKG_VERSION").to_string()),
            "--config-path" => result.custom_config_path = Some(value.to_string()),
            "--mode" => match value.parse::<ColorMode>() {
                Ok(mode) => result.color_mode = Some(mode),
                Err(err) => return arguments_with_error(err.to_string()),
            },
            "--indicator" => match value.parse::<IndicatorMode>() {
                Ok(mode) => result.indicator_mode = Some(mode),
                Err(err) => return arguments_with_error(err.to_string()),
            },
            "--color" => match parse_color(value) {
                Ok(color) => result.initial_color = Some(color),
                Err(err) => return arguments_with_error(err.to_string()),
            },
            "--show-indicator" => result.show_text_indicator = true,
            "--set" => {
                let channel_value = &args[i + 2];
                match channel_value.parse::<i32>() {
                    Ok(channel_value) => result
                        .channel_values
                        .push((value.to_string(), channel_value)),
                    Err(_) => {
                        return arguments_with_error(format!(
                            "Channel value '{}' for {} is not a number",
                            channel_value, value
                        ))
                    }
                }
            }
            _ => {}
        }

        i += 1 + found_arg.number_of_args;
    }

    return result;
}
