use colored::Colorize;
use roster::api::{FieldError, MessageLevel, SessionView};
use roster::commands::CmdMessage;
use roster::model::Person;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 26;
const ADDRESS_WIDTH: usize = 30;
const COUNTRY_WIDTH: usize = 10;
const LINE_WIDTH: usize = ID_WIDTH + NAME_WIDTH + EMAIL_WIDTH + ADDRESS_WIDTH + COUNTRY_WIDTH;

const HEADERS: [(&str, usize); 5] = [
    ("ID", ID_WIDTH),
    ("FULL NAME", NAME_WIDTH),
    ("EMAIL ADDRESS", EMAIL_WIDTH),
    ("ADDRESS", ADDRESS_WIDTH),
    ("COUNTRY", COUNTRY_WIDTH),
];

pub(super) fn print_messages(messages: &[CmdMessage], verbose: bool) {
    for message in messages {
        match message.level {
            MessageLevel::Info if verbose => println!("{}", message.content.dimmed()),
            MessageLevel::Info => {}
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_field_errors(errors: &[FieldError]) {
    for error in errors {
        println!("{}", error.to_string().red());
    }
}

pub(super) fn print_view(view: &SessionView) {
    print!("{}", render_table(&view.records));
    println!("{}", render_footer(view).dimmed());
}

pub(super) fn print_form(view: &SessionView) {
    let form = &view.form;
    let title = if view.edit_mode {
        "Personal Details (editing)"
    } else {
        "Personal Details"
    };
    println!("{}", title.bold());
    for (label, value) in [
        ("Full Name", &form.full_name),
        ("Email Address", &form.email),
        ("Address / Street", &form.address),
        ("City", &form.city),
        ("Country / region", &form.country),
    ] {
        let shown = if value.is_empty() { "-" } else { value.as_str() };
        println!("  {:<18}{}", label, shown);
    }
    println!("  [{}]", view.submit_label);
}

/// The table body for one page. An empty page renders a single "No Data" row.
pub(super) fn render_table(records: &[Person]) -> String {
    let mut out = String::new();

    let header: String = HEADERS
        .iter()
        .map(|(title, width)| fit_to_width(title, *width))
        .collect();
    out.push_str(&format!("{}\n", header.trim_end().bold()));
    out.push_str(&format!("{}\n", "─".repeat(LINE_WIDTH)));

    if records.is_empty() {
        out.push_str(&format!("{}\n", centered("No Data", LINE_WIDTH).trim_end()));
        return out;
    }

    for person in records {
        let country = person.fields.country.map(|c| c.label()).unwrap_or("");
        let row = format!(
            "{}{}{}{}{}",
            fit_to_width(&person.id.to_string(), ID_WIDTH),
            fit_to_width(person.full_name(), NAME_WIDTH),
            fit_to_width(&person.fields.email, EMAIL_WIDTH),
            fit_to_width(&person.location(), ADDRESS_WIDTH),
            fit_to_width(country, COUNTRY_WIDTH),
        );
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

pub(super) fn render_footer(view: &SessionView) -> String {
    format!(
        "Showing {} Entries · Page {} of {}",
        view.showing, view.current_page, view.total_pages
    )
}

/// Truncate or pad `s` so it takes exactly `width` terminal columns.
fn fit_to_width(s: &str, width: usize) -> String {
    let shown = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
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
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn centered(s: &str, width: usize) -> String {
    let left = width.saturating_sub(s.width()) / 2;
    format!("{}{}", " ".repeat(left), s)
}
