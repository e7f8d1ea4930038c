/// Offset pagination: `size` rows per page, `number` counted from zero.
///
/// A `size` of zero (or less) disables pagination regardless of `number`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub size: i64,
    pub number: i64,
}

impl Page {
    #[must_use]
    pub fn new(size: i64, number: i64) -> Self {
        Self { size, number }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.size > 0
    }

    /// `LIMIT <size> OFFSET <size * number>`, or an empty string when pagination is off.
    #[must_use]
    pub fn clause(&self) -> String {
        if !self.is_active() {
            return String::new();
        }
        format!(
            "LIMIT {} OFFSET {}",
            self.size,
            self.size.saturating_mul(self.number)
        )
    }
}
