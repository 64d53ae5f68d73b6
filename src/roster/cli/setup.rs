use clap::{Args, Parser, Subcommand};
use roster::form::FormInput;
use roster::model::PersonId;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Paginated person-record entry for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Records per page (overrides the config file)
    #[arg(long, global = true, help_heading = "Options")]
    pub page_size: Option<NonZeroUsize>,

    /// Directory holding config.json (also ROSTER_CONFIG_DIR)
    #[arg(long, global = true, help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session reading one command per line (default)
    Session,

    /// Get or set configuration
    Config {
        /// Configuration key (page-size, max-name-len, max-email-len)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// One line typed into a session.
#[derive(Parser, Debug)]
#[command(name = "roster>", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Fill in form fields and submit (updates the record being edited, if any)
    #[command(alias = "add")]
    Submit(FormArgs),

    /// Load a record into the form for editing
    #[command(alias = "e")]
    Edit { id: PersonId },

    /// Clear the form and stop editing
    Cancel,

    /// Delete a record
    #[command(alias = "rm")]
    Delete { id: PersonId },

    /// Go to the next page
    #[command(alias = "n")]
    Next,

    /// Go to the previous page
    #[command(alias = "p")]
    Prev,

    /// Show the current page
    #[command(alias = "ls")]
    Show {
        /// Print the session state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the form's current values
    Form,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// Full name
    #[arg(short = 'n', long = "name")]
    pub full_name: Option<String>,

    /// Email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// Address / street
    #[arg(short, long)]
    pub address: Option<String>,

    /// City
    #[arg(short, long)]
    pub city: Option<String>,

    /// Country / region (Canada, America)
    #[arg(short = 'k', long)]
    pub country: Option<String>,
}

impl From<FormArgs> for FormInput {
    fn from(args: FormArgs) -> Self {
        FormInput {
            full_name: args.full_name,
            email: args.email,
            address: args.address,
            city: args.city,
            country: args.country,
        }
    }
}

/// Split a session line into words. Single or double quotes group words;
/// quote characters themselves are dropped.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unclosed quote ({})", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
