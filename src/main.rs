// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use coloromatic::app_arguments::{get_app_arguments, AppArguments};
use coloromatic::config::{get_config_path, read_config, AppConfig};
use coloromatic::{format_color, ColorPicker};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn build_picker(config: &AppConfig, app_arguments: &AppArguments) -> ColorPicker {
    let mut picker = ColorPicker::new(
        app_arguments
            .initial_color
            .unwrap_or(config.initial_color.0),
        app_arguments.show_text_indicator || config.show_text_indicator,
        app_arguments.color_mode.unwrap_or(config.color_mode),
        app_arguments.indicator_mode.unwrap_or(config.indicator_mode),
    );

    for (channel_name, value) in &app_arguments.channel_values {
        if picker
            .set_channel_progress_by_name(channel_name, *value)
            .is_none()
        {
            eprintln!(
                "Channel {} doesn't exist in {} mode, ignored",
                channel_name,
                picker.color_mode()
            );
        }
    }

    picker
}

fn print_picker(picker: &ColorPicker) {
    let include_alpha = picker.color_mode().has_alpha();
    println!("mode: {}", picker.color_mode());
    for channel in picker.channels() {
        println!(
            "{} {} [{}..{}]",
            channel.name(),
            channel.progress(),
            channel.min(),
            channel.max()
        );
    }
    println!("color: {}", format_color(picker.current_color(), include_alpha));
    if picker.is_show_text_indicator() {
        println!("indicator: {}", picker.indicator_text());
    }
    println!("text color: {}", format_color(picker.text_color(), include_alpha));
}

pub fn main() -> ExitCode {
    init_logging();

    let app_arguments = get_app_arguments();
    if let Some(message) = &app_arguments.info_message {
        println!("{}", message);
        return ExitCode::SUCCESS;
    }
    if let Some(error) = &app_arguments.read_error {
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }

    let config = read_config(get_config_path(
        app_arguments.custom_config_path.as_deref(),
    ));
    if let Some(error) = &config.config_read_error {
        eprintln!("{}", error);
    }

    let picker = build_picker(&config, &app_arguments);
    print_picker(&picker);

    ExitCode::SUCCESS
}
