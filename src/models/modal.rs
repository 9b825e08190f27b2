//! Transaction detail overlay

#[derive(Debug, Clone, PartialEq)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
}

/// Detail view for a single transaction
///
/// Closing only flips `visible`; the content stays until the next open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalView {
    pub visible: bool,
    pub lines: Vec<DetailLine>,
    pub raw_message: String,
}

impl ModalView {
    #[cfg(test)]
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}
