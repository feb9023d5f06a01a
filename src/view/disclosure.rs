/// Collapsed/expanded toggle over a newest-first list.
///
/// Collapsed shows only the first entry; expanded shows all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure {
    total: usize,
    expanded: bool,
}

impl Disclosure {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            expanded: false,
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Entries behind the toggle.
    pub fn hidden_count(&self) -> usize {
        self.total.saturating_sub(1)
    }

    /// A list of one entry or fewer gets no toggle.
    pub fn has_toggle(&self) -> bool {
        self.total > 1
    }

    pub fn visible_count(&self) -> usize {
        if self.expanded {
            self.total
        } else {
            self.total.min(1)
        }
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_count().min(items.len())]
    }

    pub fn label(&self) -> String {
        if self.expanded {
            "Show less".to_string()
        } else {
            format!("Show {} more", self.hidden_count())
        }
    }
}
