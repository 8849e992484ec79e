use anyhow::Result;

pub fn handle() -> Result<()> {
    crate::tui::run()
}
