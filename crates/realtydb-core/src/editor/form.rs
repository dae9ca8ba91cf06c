//! Dialog form with one text field per column

use crate::model::{CellValue, Row};

/// One labelled text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub value: String,
}

/// Dynamically generated form for the add and edit dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowForm {
    fields: Vec<FormField>,
    focus: usize,
}

impl RowForm {
    /// Empty fields labelled with `labels`
    pub fn blank(labels: &[String]) -> Self {
        Self::prefilled(labels, &[])
    }

    /// Fields labelled with `labels`, pre-filled from `values` where present
    pub fn prefilled(labels: &[String], values: &[String]) -> Self {
        let fields = labels
            .iter()
            .enumerate()
            .map(|(i, label)| FormField {
                label: label.clone(),
                value: values.get(i).cloned().unwrap_or_default(),
            })
            .collect();
        Self { fields, focus: 0 }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// Replace the value of field `index`; out-of-range indices are ignored
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// Current values in column order
    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value.clone()).collect()
    }

    /// Values to store when editing `original`
    ///
    /// A field whose text still equals the original cell's display text keeps
    /// the original typed value, so untouched NULL and BLOB cells survive.
    /// Changed fields become text.
    pub fn edited_values(&self, original: &Row) -> Vec<CellValue> {
        self.fields
            .iter()
            .enumerate()
            .map(|(i, field)| match original.values.get(i) {
                Some(old) if old.display_text() == field.value => old.clone(),
                _ => CellValue::Text(field.value.clone()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["RealtorID".to_string(), "FullName".to_string()]
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = RowForm::blank(&labels());
        form.focus_prev();
        assert_eq!(form.focus(), 1);
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn test_typing_edits_focused_field_only() {
        let mut form = RowForm::prefilled(&labels(), &["3".to_string()]);
        form.focus_next();
        for c in "Олег".chars() {
            form.push_char(c);
        }
        form.pop_char();
        assert_eq!(form.values(), vec!["3".to_string(), "Оле".to_string()]);
    }

    #[test]
    fn test_edited_values_keep_untouched_typed_cells() {
        let labels = vec![
            "ClientID".to_string(),
            "FullName".to_string(),
            "PhoneNumber".to_string(),
            "Photo".to_string(),
        ];
        let original = Row::new(vec![
            CellValue::Integer(3),
            CellValue::from("Олег"),
            CellValue::Null,
            CellValue::Blob(vec![0x0a, 0xff]),
        ]);
        let mut form = RowForm::prefilled(&labels, &original.display_values());
        form.set_value(1, "Олег Орлов");

        assert_eq!(
            form.edited_values(&original),
            vec![
                CellValue::Integer(3),
                CellValue::from("Олег Орлов"),
                CellValue::Null,
                CellValue::Blob(vec![0x0a, 0xff]),
            ]
        );
    }

    #[test]
    fn test_edited_values_replace_changed_null_with_text() {
        let original = Row::new(vec![CellValue::Null]);
        let mut form = RowForm::prefilled(&["PhoneNumber".to_string()], &original.display_values());
        form.set_value(0, "5550000");

        assert_eq!(form.edited_values(&original), vec![CellValue::from("5550000")]);
    }
}
