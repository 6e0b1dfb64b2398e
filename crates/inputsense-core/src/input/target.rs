// Inputsense Input Layer - Target Exemption
// Form-editable elements where navigation keys are treated as typing

/// Tag names of elements that accept typed input
pub const FORM_ELEMENT_TAGS: [&str; 3] = ["input", "select", "textarea"];

/// Check if an event target is a form-editable element.
///
/// Tag names are compared case-insensitively, so `INPUT` (as reported by
/// `nodeName`) and `input` are equivalent. A missing target is never a
/// form element.
pub fn is_form_element(tag: Option<&str>) -> bool {
    match tag {
        Some(tag) => FORM_ELEMENT_TAGS
            .iter()
            .any(|form_tag| tag.trim().eq_ignore_ascii_case(form_tag)),
        None => false,
    }
}
