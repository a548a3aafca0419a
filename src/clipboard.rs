/// Seam over the system clipboard so copy failures can be exercised
/// without a windowing system.
pub trait ClipboardAccess {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Clipboard backed by the platform clipboard via `arboard`. The handle is
/// opened per write; holding one open keeps the selection owned on some
/// platforms.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardAccess for SystemClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}
