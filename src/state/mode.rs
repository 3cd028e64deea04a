/// What the browser is doing
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Grid browsing
    #[default]
    Normal,
    /// A failed operation is being reported; input goes to the dialog
    Error {
        message: String,
    },
}

impl Mode {
    #[cfg(test)]
    pub fn is_normal(&self) -> bool {
        matches!(self, Mode::Normal)
    }
}
