//  ____  ____                       ____
// |  _ \|  _ \ __ _ ___ ___     / ___| ___ _ __
// | |_) | |_) / _` / __/ __|  | |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \  | |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/   \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-08
// Version : 0.1.0
// License : Mulan PSL v2
//
// A secure password generator written in Rust.

use std::process;

use clap::Parser;

use rpassgen::passgen::{self, PasswordOptions};
use rpassgen::setclip;

#[derive(Debug, Parser)]
#[command(name = "rpassgen")]
#[command(about = "Generate secure random passwords", long_about = None)]
#[command(after_help = "Examples:
  rpassgen                          # Generate a 32-character password
  rpassgen -l 16                    # Generate a 16-character password
  rpassgen -l 20 --no-special       # Generate without special characters
  rpassgen -l 24 --exclude-similar  # Exclude similar-looking characters")]
struct Cli {
    /// Password length
    #[arg(short, long, default_value_t = 32)]
    length: usize,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude digits
    #[arg(long, default_value_t = false)]
    no_digits: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Exclude similar-looking characters (i, l, 1, L, o, 0, O)
    #[arg(long, default_value_t = false)]
    exclude_similar: bool,

    /// Number of passwords to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Copy the generated password to the clipboard
    #[arg(long, default_value_t = false)]
    copy: bool,
}

impl From<&Cli> for PasswordOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            length: cli.length,
            include_uppercase: !cli.no_uppercase,
            include_lowercase: !cli.no_lowercase,
            include_digits: !cli.no_digits,
            include_special: !cli.no_special,
            exclude_similar: cli.exclude_similar,
        }
    }
}

fn run(cli: &Cli) -> Result<(), passgen::PassGenError> {
    let options = PasswordOptions::from(cli);
    let mut last_password = None;

    // 生成密码并逐行输出
    for _ in 0..cli.count {
        let password = passgen::generate_password(&options)?;
        println!("{}", password);
        last_password = Some(password);
    }

    // The clipboard is best-effort: failure is a warning, not an error
    if cli.copy {
        if let Some(password) = &last_password {
            match setclip::copy_to_clipboard(password) {
                Ok(()) => {
                    if cli.count == 1 {
                        eprintln!("(Password copied to clipboard)");
                    }
                }
                Err(e) => eprintln!("Warning: Could not copy to clipboard: {}", e),
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
