//! Typed view over a form's input controls.

use contracts::shared::form_submit::FieldSet;

/// Anything that contributes a named value to a submission.
pub trait FormControl {
    fn name(&self) -> String;
    fn value(&self) -> String;
    /// Submit buttons never contribute to the payload.
    fn is_submit(&self) -> bool;
}

impl FormControl for web_sys::HtmlInputElement {
    fn name(&self) -> String {
        web_sys::HtmlInputElement::name(self)
    }

    fn value(&self) -> String {
        web_sys::HtmlInputElement::value(self)
    }

    fn is_submit(&self) -> bool {
        self.type_().eq_ignore_ascii_case("submit")
    }
}

/// Copy the current values of `controls` into a [`FieldSet`], keeping
/// document order and skipping submit controls. Empty values are kept.
pub fn gather_fields<'a, C, I>(controls: I) -> FieldSet
where
    C: FormControl + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let mut fields = FieldSet::new();
    for control in controls {
        if control.is_submit() {
            continue;
        }
        fields.append(control.name(), control.value());
    }
    fields
}
