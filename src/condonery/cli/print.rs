use colored::Colorize;
use condonery::commands::HELP_TEXT;
use condonery::model::{Client, Property, Tag};
use std::collections::BTreeSet;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 28;

pub(super) fn print_feedback(feedback: &str) {
    println!("{}", feedback.green());
}

pub(super) fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

pub(super) fn print_help() {
    println!("{}", HELP_TEXT.as_str());
}

pub(super) fn print_properties(properties: &[&Property]) {
    if properties.is_empty() {
        println!("{}", "No properties to show.".dimmed());
        return;
    }
    for (i, property) in properties.iter().enumerate() {
        let mut details = format!("{}{}", property.address(), format_tags(property.tags()));
        if !property.interested_clients().is_empty() {
            let clients: Vec<&str> = property
                .interested_clients()
                .iter()
                .map(|name| name.as_str())
                .collect();
            details.push_str(&format!("  interested: {}", clients.join(", ")));
        }
        print_row(i + 1, property.name().as_str(), &details);
    }
}

pub(super) fn print_clients(clients: &[&Client]) {
    if clients.is_empty() {
        println!("{}", "No clients to show.".dimmed());
        return;
    }
    for (i, client) in clients.iter().enumerate() {
        let details = format!(
            "{}  {}  {}{}",
            client.phone(),
            client.email(),
            client.address(),
            format_tags(client.tags())
        );
        print_row(i + 1, client.name().as_str(), &details);
    }
}

fn print_row(index: usize, name: &str, details: &str) {
    let idx_str = format!("{:>4}. ", index);
    let name_display = truncate_to_width(name, NAME_WIDTH);
    let padding = NAME_WIDTH.saturating_sub(name_display.width());

    let fixed_width = idx_str.width() + NAME_WIDTH + 2;
    let details_display = truncate_to_width(details, LINE_WIDTH.saturating_sub(fixed_width));

    println!(
        "{}{}{}  {}",
        idx_str.yellow(),
        name_display.bold(),
        " ".repeat(padding),
        details_display.dimmed()
    );
}

fn format_tags(tags: &BTreeSet<Tag>) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let tags: String = tags.iter().map(|tag| format!("[{}]", tag)).collect();
    format!("  {}", tags)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
