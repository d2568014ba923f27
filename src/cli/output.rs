//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::router::Route;
use crate::session::User;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Print the route table with access requirements
pub fn print_route_table(routes: &[Route]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Path").fg(Color::Cyan),
            Cell::new("Name").fg(Color::Cyan),
            Cell::new("Title").fg(Color::Cyan),
            Cell::new("Access").fg(Color::Cyan),
        ]);

    for route in routes {
        let (access, access_color) = if route.meta.requires_admin {
            ("admin", Color::Red)
        } else if route.meta.requires_auth {
            ("authenticated", Color::Yellow)
        } else {
            ("public", Color::Green)
        };

        table.add_row(vec![
            Cell::new(&route.path),
            Cell::new(&route.name),
            Cell::new(route.meta.title.as_deref().unwrap_or("-")),
            Cell::new(access).fg(access_color),
        ]);
    }

    println!("{table}");
}

/// Print the current user's details
pub fn print_user_detail(user: &User) {
    println!("{}", "Current Session".bold().underline());
    println!();
    println!("  {} {}", "User:".bold(), user.username);
    println!("  {} {}", "ID:".bold(), user.id);
    println!("  {} {}", "Role:".bold(), format_role(&user.role.to_string()));
}

/// Format a role as a colored string
pub fn format_role(role: &str) -> String {
    match role {
        "admin" => role.red().to_string(),
        "analyst" => role.yellow().to_string(),
        _ => role.green().to_string(),
    }
}
