#![forbid(unsafe_code)]

//! Element id, class names and the HTML template for the popover node.
//!
//! Stylesheets key off these names, so they are part of the public contract.

/// Id of the popover root element.
pub const ID_POPOVER: &str = "driver-popover-item";

pub const CLASS_POPOVER_TIP: &str = "driver-popover-tip";
pub const CLASS_POPOVER_TITLE: &str = "driver-popover-title";
pub const CLASS_POPOVER_DESCRIPTION: &str = "driver-popover-description";
pub const CLASS_POPOVER_FOOTER: &str = "driver-popover-footer";
pub const CLASS_CLOSE_BTN: &str = "driver-close-btn";
pub const CLASS_NEXT_STEP_BTN: &str = "driver-next-btn";
pub const CLASS_PREV_STEP_BTN: &str = "driver-prev-btn";
pub const CLASS_BTN_GROUP: &str = "driver-btn-group";

/// Marks a navigation button as inactive.
pub const CLASS_BTN_DISABLED: &str = "driver-disabled";

/// Markup injected once when the page has no popover root yet.
pub const POPOVER_HTML: &str = r#"<div id="driver-popover-item">
  <div class="driver-popover-tip"></div>
  <div class="driver-popover-title">Popover Title</div>
  <div class="driver-popover-description">Popover Description</div>
  <div class="driver-popover-footer">
    <button class="driver-close-btn">Close</button>
    <span class="driver-btn-group">
      <button class="driver-prev-btn">&larr; Previous</button>
      <button class="driver-next-btn">Next &rarr;</button>
    </span>
  </div>
</div>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_carries_every_class() {
        for class in [
            CLASS_POPOVER_TIP,
            CLASS_POPOVER_TITLE,
            CLASS_POPOVER_DESCRIPTION,
            CLASS_POPOVER_FOOTER,
            CLASS_CLOSE_BTN,
            CLASS_NEXT_STEP_BTN,
            CLASS_PREV_STEP_BTN,
            CLASS_BTN_GROUP,
        ] {
            assert!(
                POPOVER_HTML.contains(&format!("class=\"{class}\"")),
                "template missing {class}"
            );
        }
        assert!(POPOVER_HTML.contains(&format!("id=\"{ID_POPOVER}\"")));
    }
}
