//  ____  ____                       ____
// |  _ \|  _ \ __ _ ___ ___     / ___| ___ _ __
// | |_) | |_) / _` / __/ __|  | |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \  | |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/   \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-11
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy `secret` to the system clipboard.
///
/// Failure here never aborts anything: the caller downgrades it to a
/// warning and the generated password is still printed.
pub fn copy_to_clipboard(secret: &str) -> Result<()> {
    // X11 下剪贴板内容只在本进程存活期间保留，需配合剪贴板管理器使用
    let mut clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
    clipboard
        .set_text(secret)
        .context("Failed to write to clipboard")?;
    Ok(())
}
